use std::collections::hash_map::Entry;
use std::collections::HashMap;

use error_stack::Report;
use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookId};
use kernel::KernelError;

#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: HashMap<BookId, Book>,
}

impl BookQuery for InMemoryBookRepository {
    fn find_by_id(&self, id: &BookId) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(self.books.get(id).cloned())
    }

    fn find_all(&self) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(self.books.values().cloned().collect())
    }

    fn search(
        &self,
        title: Option<&str>,
        author: Option<&str>,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(self
            .books
            .values()
            .filter(|book| book.matches(title, author))
            .cloned()
            .collect())
    }
}

impl BookModifier for InMemoryBookRepository {
    fn create(&mut self, book: Book) -> error_stack::Result<(), KernelError> {
        match self.books.entry(book.id().clone()) {
            Entry::Occupied(entry) => Err(Report::new(KernelError::AlreadyExists)
                .attach_printable(format!("Book {} already exists", entry.key()))),
            Entry::Vacant(entry) => {
                entry.insert(book);
                Ok(())
            }
        }
    }

    fn update(&mut self, book: Book) -> error_stack::Result<(), KernelError> {
        match self.books.get_mut(book.id()) {
            Some(stored) => {
                *stored = book;
                Ok(())
            }
            None => Err(not_found(book.id())),
        }
    }

    fn delete(&mut self, id: &BookId) -> error_stack::Result<(), KernelError> {
        self.books
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: &BookId) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("Book {id} not found"))
}
