use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    AlreadyExists,
    NotFound,
    BookAlreadyLent,
    BookNotFound,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::AlreadyExists => write!(f, "Entity already exists"),
            KernelError::NotFound => write!(f, "Entity not found"),
            KernelError::BookAlreadyLent => write!(f, "Book is already lent"),
            KernelError::BookNotFound => write!(f, "Book to lend was not found"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
