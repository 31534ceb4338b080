use error_stack::Report;
use tracing::info;

use kernel::interface::clock::DependOnClock;
use kernel::interface::query::{BookQuery, DependOnBookQuery, DependOnLoanQuery, LoanQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier, DependOnLoanModifier};
use kernel::prelude::entity::{Book, BookAuthor, BookGenre, BookId, BookTitle};
use kernel::KernelError;
use uuid::Uuid;

use crate::service::loan::force_return;
use crate::service::to_json;
use crate::transfer::{BookDto, DeleteBookDto, GetBookDto, SearchBookDto, UpdateBookDto};

pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&id)?;
        Ok(book.map(BookDto::from))
    }

    fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let books = self.book_query().find_all()?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }

    fn search_books(&self, dto: SearchBookDto) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let books = self
            .book_query()
            .search(dto.title.as_deref(), dto.author.as_deref())?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

pub trait PrintBookService: 'static + Sync + Send + GetBookService {
    fn print_all_books(&self) -> error_stack::Result<(), KernelError> {
        let books = self.get_all_books()?;
        info!("Books: {}", to_json(&books)?);
        Ok(())
    }

    fn print_found_books(&self, dto: SearchBookDto) -> error_stack::Result<(), KernelError> {
        let books = self.search_books(dto)?;
        info!("Found books: {}", to_json(&books)?);
        Ok(())
    }
}

impl<T> PrintBookService for T where T: GetBookService {}

pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    #[tracing::instrument(skip_all, fields(book_id = %dto.id))]
    fn add_book(&mut self, dto: BookDto) -> error_stack::Result<(), KernelError> {
        let book = Book::from(dto);
        let title = book.title().clone();
        self.book_modifier().create(book)?;
        info!("Book {} added to the library", title.as_ref());
        Ok(())
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}

pub trait UpdateBookService: 'static + Sync + Send + DependOnBookQuery + DependOnBookModifier {
    #[tracing::instrument(skip_all, fields(book_id = %dto.id))]
    fn update_book(&mut self, dto: UpdateBookDto) -> error_stack::Result<(), KernelError> {
        let id = BookId::new(dto.id);
        let mut book = self
            .book_query()
            .find_by_id(&id)?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable(format!("Book {id} not found"))
            })?;
        book.substitute(|book| {
            if let Some(title) = dto.title {
                *book.title = BookTitle::new(title);
            }
            if let Some(author) = dto.author {
                *book.author = BookAuthor::new(author);
            }
            if let Some(genre) = dto.genre {
                *book.genre = genre;
            }
        });
        self.book_modifier().update(book)?;
        info!("Book {id} updated");
        Ok(())
    }

    fn change_book_title(
        &mut self,
        id: Uuid,
        title: impl Into<String>,
    ) -> error_stack::Result<(), KernelError> {
        self.update_book(UpdateBookDto {
            id,
            title: Some(title.into()),
            author: None,
            genre: None,
        })
    }

    fn change_book_author(
        &mut self,
        id: Uuid,
        author: impl Into<String>,
    ) -> error_stack::Result<(), KernelError> {
        self.update_book(UpdateBookDto {
            id,
            title: None,
            author: Some(author.into()),
            genre: None,
        })
    }

    fn change_book_genre(
        &mut self,
        id: Uuid,
        genre: BookGenre,
    ) -> error_stack::Result<(), KernelError> {
        self.update_book(UpdateBookDto {
            id,
            title: None,
            author: None,
            genre: Some(genre),
        })
    }
}

impl<T> UpdateBookService for T where T: DependOnBookQuery + DependOnBookModifier {}

pub trait DeleteBookService:
    'static
    + Sync
    + Send
    + DependOnBookQuery
    + DependOnBookModifier
    + DependOnLoanQuery
    + DependOnLoanModifier
    + DependOnClock
{
    /// Loans still holding the book are force-returned before it leaves the catalog.
    #[tracing::instrument(skip_all, fields(book_id = %dto.id))]
    fn delete_book(&mut self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&id)?.ok_or_else(|| {
            Report::new(KernelError::NotFound).attach_printable(format!("Book {id} not found"))
        })?;

        let loans = self.loan_query().find_by_book_id(&id)?;
        if !loans.is_empty() {
            force_return(self, loans)?;
        }

        self.book_modifier().delete(&id)?;
        info!("Book {} removed from the library", book.title().as_ref());
        Ok(())
    }
}

impl<T> DeleteBookService for T where
    T: DependOnBookQuery
        + DependOnBookModifier
        + DependOnLoanQuery
        + DependOnLoanModifier
        + DependOnClock
{
}
