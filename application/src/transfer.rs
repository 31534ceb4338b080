mod book;
mod loan;
mod user;

pub use self::{book::*, loan::*, user::*};
