mod author;
mod genre;
mod id;
mod title;

pub use self::{author::*, genre::*, id::*, title::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    genre: BookGenre,
}

impl Book {
    pub fn new(id: BookId, title: BookTitle, author: BookAuthor, genre: BookGenre) -> Self {
        Self {
            id,
            title,
            author,
            genre,
        }
    }

    /// Title and author filters compare case-insensitively; `None` matches any value.
    pub fn matches(&self, title: Option<&str>, author: Option<&str>) -> bool {
        title.map_or(true, |title| self.title.matches(title))
            && author.map_or(true, |author| self.author.matches(author))
    }
}
