use error_stack::Report;
use tracing::info;
use uuid::Uuid;

use kernel::interface::clock::DependOnClock;
use kernel::interface::query::{DependOnLoanQuery, DependOnUserQuery, LoanQuery, UserQuery};
use kernel::interface::update::{DependOnLoanModifier, DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{User, UserId, UserName, UserPhone, UserSurname};
use kernel::KernelError;

use crate::service::loan::force_return;
use crate::service::to_json;
use crate::transfer::{DeleteUserDto, GetUserDto, UpdateUserDto, UserDto};

pub trait GetUserService: 'static + Sync + Send + DependOnUserQuery {
    fn get_user(&self, dto: GetUserDto) -> error_stack::Result<Option<UserDto>, KernelError> {
        let id = UserId::new(dto.id);
        let user = self.user_query().find_by_id(&id)?;
        Ok(user.map(UserDto::from))
    }

    fn get_all_users(&self) -> error_stack::Result<Vec<UserDto>, KernelError> {
        let users = self.user_query().find_all()?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }
}

impl<T> GetUserService for T where T: DependOnUserQuery {}

pub trait PrintUserService: 'static + Sync + Send + GetUserService {
    fn print_all_users(&self) -> error_stack::Result<(), KernelError> {
        let users = self.get_all_users()?;
        info!("Users: {}", to_json(&users)?);
        Ok(())
    }
}

impl<T> PrintUserService for T where T: GetUserService {}

pub trait CreateUserService: 'static + Sync + Send + DependOnUserModifier {
    #[tracing::instrument(skip_all, fields(user_id = %dto.id))]
    fn add_user(&mut self, dto: UserDto) -> error_stack::Result<(), KernelError> {
        let name = format!("{} {}", dto.name, dto.surname);
        self.user_modifier().create(User::from(dto))?;
        info!("User {name} added to the library");
        Ok(())
    }
}

impl<T> CreateUserService for T where T: DependOnUserModifier {}

pub trait UpdateUserService: 'static + Sync + Send + DependOnUserQuery + DependOnUserModifier {
    #[tracing::instrument(skip_all, fields(user_id = %dto.id))]
    fn update_user(&mut self, dto: UpdateUserDto) -> error_stack::Result<(), KernelError> {
        let id = UserId::new(dto.id);
        let Some(mut user) = self.user_query().find_by_id(&id)? else {
            return Err(
                Report::new(KernelError::NotFound).attach_printable(format!("User {id} not found"))
            );
        };
        user.substitute(|user| {
            if let Some(name) = dto.name {
                *user.name = UserName::new(name);
            }
            if let Some(surname) = dto.surname {
                *user.surname = UserSurname::new(surname);
            }
            if let Some(phone) = dto.phone {
                *user.phone = UserPhone::new(phone);
            }
        });
        self.user_modifier().update(user)?;
        info!("User {id} updated");
        Ok(())
    }

    fn change_user_name(
        &mut self,
        id: Uuid,
        name: impl Into<String>,
    ) -> error_stack::Result<(), KernelError> {
        self.update_user(UpdateUserDto {
            id,
            name: Some(name.into()),
            surname: None,
            phone: None,
        })
    }

    fn change_user_surname(
        &mut self,
        id: Uuid,
        surname: impl Into<String>,
    ) -> error_stack::Result<(), KernelError> {
        self.update_user(UpdateUserDto {
            id,
            name: None,
            surname: Some(surname.into()),
            phone: None,
        })
    }

    fn change_user_phone(&mut self, id: Uuid, phone: i64) -> error_stack::Result<(), KernelError> {
        self.update_user(UpdateUserDto {
            id,
            name: None,
            surname: None,
            phone: Some(phone),
        })
    }
}

impl<T> UpdateUserService for T where T: DependOnUserQuery + DependOnUserModifier {}

pub trait DeleteUserService:
    'static
    + Sync
    + Send
    + DependOnUserQuery
    + DependOnUserModifier
    + DependOnLoanQuery
    + DependOnLoanModifier
    + DependOnClock
{
    /// Every book the user still holds is force-returned first.
    #[tracing::instrument(skip_all, fields(user_id = %dto.id))]
    fn delete_user(&mut self, dto: DeleteUserDto) -> error_stack::Result<(), KernelError> {
        let id = UserId::new(dto.id);
        if self.user_query().find_by_id(&id)?.is_none() {
            return Err(
                Report::new(KernelError::NotFound).attach_printable(format!("User {id} not found"))
            );
        }

        let loans = self.loan_query().find_by_user_id(&id)?;
        if !loans.is_empty() {
            force_return(self, loans)?;
        }

        self.user_modifier().delete(&id)?;
        info!("User {id} removed from the library");
        Ok(())
    }
}

impl<T> DeleteUserService for T where
    T: DependOnUserQuery
        + DependOnUserModifier
        + DependOnLoanQuery
        + DependOnLoanModifier
        + DependOnClock
{
}
