use crate::entity::{User, UserId};
use crate::KernelError;

pub trait UserQuery: 'static + Sync + Send {
    fn find_by_id(&self, id: &UserId) -> error_stack::Result<Option<User>, KernelError>;
    fn find_all(&self) -> error_stack::Result<Vec<User>, KernelError>;
}

pub trait DependOnUserQuery: 'static + Sync + Send {
    type UserQuery: UserQuery;
    fn user_query(&self) -> &Self::UserQuery;
}
