pub use self::library::*;

mod library;
pub mod service;
pub mod transfer;

#[cfg(test)]
mod testing;
