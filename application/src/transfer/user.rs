use serde::Serialize;
use uuid::Uuid;

use kernel::prelude::entity::{DestructUser, User, UserId, UserName, UserPhone, UserSurname};

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub phone: i64,
}

impl UserDto {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, phone: i64) -> Self {
        Self {
            id: UserId::generate().into(),
            name: name.into(),
            surname: surname.into(),
            phone,
        }
    }
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser {
            id,
            name,
            surname,
            phone,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            surname: surname.into(),
            phone: phone.into(),
        }
    }
}

impl From<UserDto> for User {
    fn from(value: UserDto) -> Self {
        User::new(
            UserId::new(value.id),
            UserName::new(value.name),
            UserSurname::new(value.surname),
            UserPhone::new(value.phone),
        )
    }
}

pub struct GetUserDto {
    pub id: Uuid,
}

pub struct UpdateUserDto {
    pub id: Uuid,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub phone: Option<i64>,
}

pub struct DeleteUserDto {
    pub id: Uuid,
}
