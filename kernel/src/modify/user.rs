use crate::entity::{User, UserId};
use crate::KernelError;

pub trait UserModifier: 'static + Sync + Send {
    fn create(&mut self, user: User) -> error_stack::Result<(), KernelError>;
    fn update(&mut self, user: User) -> error_stack::Result<(), KernelError>;
    fn delete(&mut self, id: &UserId) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnUserModifier: 'static + Sync + Send {
    type UserModifier: UserModifier;
    fn user_modifier(&mut self) -> &mut Self::UserModifier;
}
