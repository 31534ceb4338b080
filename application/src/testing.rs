use driver::clock::FixedClock;
use driver::database::{InMemoryBookRepository, InMemoryLoanRepository, InMemoryUserRepository};
use time::Date;

use crate::Library;

pub(crate) type TestLibrary =
    Library<InMemoryBookRepository, InMemoryUserRepository, InMemoryLoanRepository, FixedClock>;

/// A fresh, empty library whose clock reads `today`. The returned clock
/// shares its date with the library's.
pub(crate) fn library(today: Date) -> (TestLibrary, FixedClock) {
    let clock = FixedClock::new(today);
    let library = Library::new(
        "Moscow State University Library",
        InMemoryBookRepository::default(),
        InMemoryUserRepository::default(),
        InMemoryLoanRepository::default(),
        clock.clone(),
    );
    (library, clock)
}
