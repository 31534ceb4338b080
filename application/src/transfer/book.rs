use serde::Serialize;
use uuid::Uuid;

use kernel::prelude::entity::{Book, BookAuthor, BookGenre, BookId, BookTitle, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: BookGenre,
}

impl BookDto {
    /// A new catalog entry with a freshly generated id.
    pub fn new(title: impl Into<String>, author: impl Into<String>, genre: BookGenre) -> Self {
        Self {
            id: BookId::generate().into(),
            title: title.into(),
            author: author.into(),
            genre,
        }
    }
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            genre,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            genre,
        }
    }
}

impl From<BookDto> for Book {
    fn from(value: BookDto) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            BookAuthor::new(value.author),
            value.genre,
        )
    }
}

pub struct GetBookDto {
    pub id: Uuid,
}

#[derive(Debug, Default)]
pub struct SearchBookDto {
    pub title: Option<String>,
    pub author: Option<String>,
}

pub struct UpdateBookDto {
    pub id: Uuid,
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<BookGenre>,
}

pub struct DeleteBookDto {
    pub id: Uuid,
}
