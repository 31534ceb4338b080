use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::query::{
    BookQuery, DependOnBookQuery, DependOnLoanQuery, DependOnUserQuery, LoanQuery, UserQuery,
};
use kernel::interface::update::{
    BookModifier, DependOnBookModifier, DependOnLoanModifier, DependOnUserModifier, LoanModifier,
    UserModifier,
};

/// The catalog facade. Owns the two registries, the lending ledger and the
/// clock; every use case in [`crate::service`] is available on it.
pub struct Library<Books, Users, Loans, Today> {
    name: String,
    books: Books,
    users: Users,
    loans: Loans,
    clock: Today,
}

impl<Books, Users, Loans, Today> Library<Books, Users, Loans, Today> {
    pub fn new(
        name: impl Into<String>,
        books: Books,
        users: Users,
        loans: Loans,
        clock: Today,
    ) -> Self {
        Self {
            name: name.into(),
            books,
            users,
            loans,
            clock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<Books, Users, Loans, Today> DependOnBookQuery for Library<Books, Users, Loans, Today>
where
    Books: BookQuery + BookModifier,
    Users: UserQuery + UserModifier,
    Loans: LoanQuery + LoanModifier,
    Today: Clock,
{
    type BookQuery = Books;
    fn book_query(&self) -> &Self::BookQuery {
        &self.books
    }
}

impl<Books, Users, Loans, Today> DependOnBookModifier for Library<Books, Users, Loans, Today>
where
    Books: BookQuery + BookModifier,
    Users: UserQuery + UserModifier,
    Loans: LoanQuery + LoanModifier,
    Today: Clock,
{
    type BookModifier = Books;
    fn book_modifier(&mut self) -> &mut Self::BookModifier {
        &mut self.books
    }
}

impl<Books, Users, Loans, Today> DependOnUserQuery for Library<Books, Users, Loans, Today>
where
    Books: BookQuery + BookModifier,
    Users: UserQuery + UserModifier,
    Loans: LoanQuery + LoanModifier,
    Today: Clock,
{
    type UserQuery = Users;
    fn user_query(&self) -> &Self::UserQuery {
        &self.users
    }
}

impl<Books, Users, Loans, Today> DependOnUserModifier for Library<Books, Users, Loans, Today>
where
    Books: BookQuery + BookModifier,
    Users: UserQuery + UserModifier,
    Loans: LoanQuery + LoanModifier,
    Today: Clock,
{
    type UserModifier = Users;
    fn user_modifier(&mut self) -> &mut Self::UserModifier {
        &mut self.users
    }
}

impl<Books, Users, Loans, Today> DependOnLoanQuery for Library<Books, Users, Loans, Today>
where
    Books: BookQuery + BookModifier,
    Users: UserQuery + UserModifier,
    Loans: LoanQuery + LoanModifier,
    Today: Clock,
{
    type LoanQuery = Loans;
    fn loan_query(&self) -> &Self::LoanQuery {
        &self.loans
    }
}

impl<Books, Users, Loans, Today> DependOnLoanModifier for Library<Books, Users, Loans, Today>
where
    Books: BookQuery + BookModifier,
    Users: UserQuery + UserModifier,
    Loans: LoanQuery + LoanModifier,
    Today: Clock,
{
    type LoanModifier = Loans;
    fn loan_modifier(&mut self) -> &mut Self::LoanModifier {
        &mut self.loans
    }
}

impl<Books, Users, Loans, Today> DependOnClock for Library<Books, Users, Loans, Today>
where
    Books: BookQuery + BookModifier,
    Users: UserQuery + UserModifier,
    Loans: LoanQuery + LoanModifier,
    Today: Clock,
{
    type Clock = Today;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{BookGenre, LoanStatus};
    use kernel::KernelError;
    use time::macros::date;

    use crate::service::{
        CreateBookService, CreateUserService, DeleteBookService, DeleteUserService,
        GetBookService, GetLoanService, GetUserService, LendBookService, ReturnBookService,
        UpdateBookService,
    };
    use crate::testing::library;
    use crate::transfer::{
        BookDto, DeleteBookDto, DeleteUserDto, GetLoanFromBookIdDto, GetLoanFromUserIdDto,
        GetUserDto, LendBookDto, ReturnBookDto, SearchBookDto, UserDto,
    };

    #[test]
    fn deleting_lent_book_returns_it_first() -> error_stack::Result<(), KernelError> {
        let (mut library, _) = library(date!(2024 - 02 - 20));
        let book = BookDto::new("Emma", "Jane Austen", BookGenre::Romance);
        let kept = BookDto::new("Persuasion", "Jane Austen", BookGenre::Romance);
        let user = UserDto::new("Victoria", "Shilova", 79005830462);
        library.add_book(book.clone())?;
        library.add_book(kept.clone())?;
        library.add_user(user.clone())?;
        for id in [book.id, kept.id] {
            library.lend_book(LendBookDto {
                book_id: id,
                user_id: user.id,
                period: None,
            })?;
        }

        library.delete_book(DeleteBookDto { id: book.id })?;

        assert_eq!(library.get_all_books()?, vec![kept.clone()]);
        assert!(library
            .get_loans_from_book(GetLoanFromBookIdDto { book_id: book.id })?
            .is_empty());
        assert_eq!(
            library
                .get_loans_from_user(GetLoanFromUserIdDto { user_id: user.id })?
                .len(),
            1
        );
        let returned = library.return_book(ReturnBookDto {
            book_id: book.id,
            user_id: user.id,
        })?;
        assert!(returned.is_none());

        Ok(())
    }

    #[test]
    fn deleting_indebted_user_returns_their_books() -> error_stack::Result<(), KernelError> {
        let (mut library, _) = library(date!(2024 - 02 - 20));
        let first = BookDto::new("Emma", "Jane Austen", BookGenre::Romance);
        let second = BookDto::new("Dracula", "Bram Stoker", BookGenre::Horror);
        let debtor = UserDto::new("Victoria", "Shilova", 79005830462);
        let reader = UserDto::new("Natalia", "Shilova", 79042600860);
        library.add_book(first.clone())?;
        library.add_book(second.clone())?;
        library.add_user(debtor.clone())?;
        library.add_user(reader.clone())?;
        library.lend_book(LendBookDto {
            book_id: first.id,
            user_id: debtor.id,
            period: None,
        })?;
        library.lend_book(LendBookDto {
            book_id: second.id,
            user_id: reader.id,
            period: None,
        })?;

        library.delete_user(DeleteUserDto { id: debtor.id })?;

        assert_eq!(library.get_all_users()?, vec![reader.clone()]);
        let loans = library.get_all_loans()?;
        assert_eq!(loans.len(), 1);
        assert_eq!(loans[0].user_id, reader.id);
        assert_eq!(library.get_all_books()?.len(), 2);

        library.lend_book(LendBookDto {
            book_id: first.id,
            user_id: reader.id,
            period: None,
        })?;

        Ok(())
    }

    #[test]
    fn deleting_unencumbered_entities_touches_no_loans() -> error_stack::Result<(), KernelError> {
        let (mut library, _) = library(date!(2024 - 02 - 20));
        let book = BookDto::new("Emma", "Jane Austen", BookGenre::Romance);
        let user = UserDto::new("Victoria", "Shilova", 79005830462);
        library.add_book(book.clone())?;
        library.add_user(user.clone())?;

        library.delete_book(DeleteBookDto { id: book.id })?;
        library.delete_user(DeleteUserDto { id: user.id })?;

        assert!(library.get_all_books()?.is_empty());
        assert!(library.get_all_users()?.is_empty());
        assert_eq!(library.name(), "Moscow State University Library");

        Ok(())
    }

    #[test]
    fn flowers_for_algernon() -> error_stack::Result<(), KernelError> {
        let (mut library, _) = library(date!(2024 - 02 - 20));
        let book = BookDto::new("Flowers for Algernon", "Daniel Kie", BookGenre::Drama);
        library.add_book(book.clone())?;
        library.change_book_author(book.id, "Daniel Keyes")?;

        let found = library.search_books(SearchBookDto {
            title: Some("Flowers for Algernon".to_string()),
            author: None,
        })?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].author, "Daniel Keyes");

        let user = UserDto::new("Victoria", "Shilova", 79005830462);
        library.add_user(user.clone())?;
        let loan = library.lend_book(LendBookDto {
            book_id: book.id,
            user_id: user.id,
            period: None,
        })?;
        assert_eq!(loan.due_date, date!(2024 - 03 - 05));
        assert_eq!(library.get_all_loans()?, vec![loan.clone()]);

        let returned = library.return_book(ReturnBookDto {
            book_id: book.id,
            user_id: user.id,
        })?;
        let returned = returned.ok_or_else(|| {
            error_stack::Report::new(KernelError::NotFound).attach_printable("loan vanished")
        })?;
        assert_eq!(returned.status, LoanStatus::OnTime);
        assert_eq!(returned.loan, loan);
        assert!(library.get_all_loans()?.is_empty());

        library.lend_book(LendBookDto {
            book_id: book.id,
            user_id: user.id,
            period: None,
        })?;
        assert!(library.get_user(GetUserDto { id: user.id })?.is_some());

        Ok(())
    }
}
