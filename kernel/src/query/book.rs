use crate::entity::{Book, BookId};
use crate::KernelError;

pub trait BookQuery: 'static + Sync + Send {
    fn find_by_id(&self, id: &BookId) -> error_stack::Result<Option<Book>, KernelError>;
    fn find_all(&self) -> error_stack::Result<Vec<Book>, KernelError>;
    /// Books matching every supplied filter, compared case-insensitively.
    fn search(
        &self,
        title: Option<&str>,
        author: Option<&str>,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
}

pub trait DependOnBookQuery: 'static + Sync + Send {
    type BookQuery: BookQuery;
    fn book_query(&self) -> &Self::BookQuery;
}
