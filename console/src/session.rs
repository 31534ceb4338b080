use application::service::{
    CreateBookService, CreateUserService, DeleteUserService, LendBookService, PrintBookService,
    PrintLoanService, PrintUserService, ReturnBookService, UpdateBookService, UpdateUserService,
};
use application::transfer::{
    BookDto, DeleteUserDto, LendBookDto, ReturnBookDto, SearchBookDto, UserDto,
};
use driver::config::LibraryConfig;
use kernel::prelude::entity::BookGenre;
use kernel::KernelError;
use tracing::info;

use crate::error::recoverable;
use crate::handler::AppModule;

/// Walks the catalog through a short day at the desk.
pub fn run(
    library: &mut AppModule,
    config: &LibraryConfig,
) -> error_stack::Result<(), KernelError> {
    info!("Opening {}", library.name());

    let victoria = UserDto::new("Victoria", "Shilova", 79005830462);
    let natalia = UserDto::new("Natalia", "Shilova", 79042600860);
    let pride = BookDto::new("Pride and Prejudice", "Jane Osten", BookGenre::Romance);

    recoverable(library.add_book(pride.clone()))?;
    recoverable(library.add_user(victoria.clone()))?;
    recoverable(library.add_user(natalia.clone()))?;
    library.print_all_users()?;
    recoverable(library.delete_user(DeleteUserDto { id: natalia.id }))?;
    recoverable(library.add_user(natalia.clone()))?;
    recoverable(library.change_user_phone(natalia.id, 79042600861))?;
    library.print_all_users()?;

    // Second registration of the same book is refused.
    recoverable(library.add_book(pride))?;

    let algernon = BookDto::new("Flowers for Algernon", "Daniel Kie", BookGenre::Drama);
    recoverable(library.add_book(algernon.clone()))?;
    recoverable(library.change_book_author(algernon.id, "Daniel Keyes"))?;
    library.print_all_books()?;
    library.print_found_books(SearchBookDto {
        title: Some("Flowers for Algernon".to_string()),
        author: None,
    })?;
    library.print_found_books(SearchBookDto {
        title: None,
        author: Some("Jane Osten".to_string()),
    })?;

    recoverable(library.lend_book(LendBookDto {
        book_id: algernon.id,
        user_id: victoria.id,
        period: Some(*config.loan_period.as_ref()),
    }))?;
    library.print_all_loans()?;

    if let Some(Some(returned)) = recoverable(library.return_book(ReturnBookDto {
        book_id: algernon.id,
        user_id: victoria.id,
    }))? {
        info!("{} came back {}", returned.loan.title, returned.status);
    }
    library.print_all_loans()?;

    Ok(())
}

#[cfg(test)]
mod test {
    use application::service::{GetBookService, GetLoanService, GetUserService};
    use driver::config::LibraryConfig;
    use kernel::KernelError;

    use crate::handler;
    use crate::session::run;

    #[test]
    fn sample_session_completes() -> error_stack::Result<(), KernelError> {
        let config = LibraryConfig::default();
        let mut library = handler::init(&config);

        run(&mut library, &config)?;

        assert_eq!(library.get_all_books()?.len(), 2);
        assert_eq!(library.get_all_users()?.len(), 2);
        assert!(library.get_all_loans()?.is_empty());
        Ok(())
    }
}
