use application::Library;
use driver::clock::SystemClock;
use driver::config::LibraryConfig;
use driver::database::{InMemoryBookRepository, InMemoryLoanRepository, InMemoryUserRepository};

pub type AppModule =
    Library<InMemoryBookRepository, InMemoryUserRepository, InMemoryLoanRepository, SystemClock>;

pub fn init(config: &LibraryConfig) -> AppModule {
    Library::new(
        config.name.clone(),
        InMemoryBookRepository::default(),
        InMemoryUserRepository::default(),
        InMemoryLoanRepository::default(),
        SystemClock,
    )
}
