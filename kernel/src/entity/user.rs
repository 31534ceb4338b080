mod id;
mod name;
mod phone;

pub use self::{id::*, name::*, phone::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Destructure, Mutation, References)]
pub struct User {
    id: UserId,
    name: UserName,
    surname: UserSurname,
    phone: UserPhone,
}

impl User {
    pub fn new(id: UserId, name: UserName, surname: UserSurname, phone: UserPhone) -> Self {
        Self {
            id,
            name,
            surname,
            phone,
        }
    }
}
