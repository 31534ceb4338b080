use crate::entity::{Book, BookId};
use crate::KernelError;

pub trait BookModifier: 'static + Sync + Send {
    /// Fails with [`KernelError::AlreadyExists`] when the id is already stored.
    fn create(&mut self, book: Book) -> error_stack::Result<(), KernelError>;
    /// Fails with [`KernelError::NotFound`] when the id is unknown.
    fn update(&mut self, book: Book) -> error_stack::Result<(), KernelError>;
    /// Fails with [`KernelError::NotFound`] when the id is unknown.
    fn delete(&mut self, id: &BookId) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookModifier: 'static + Sync + Send {
    type BookModifier: BookModifier;
    fn book_modifier(&mut self) -> &mut Self::BookModifier;
}
