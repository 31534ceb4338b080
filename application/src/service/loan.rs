use error_stack::Report;
use tracing::{debug, info, warn};

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::query::{
    BookQuery, DependOnBookQuery, DependOnLoanQuery, DependOnUserQuery, LoanQuery, UserQuery,
};
use kernel::interface::update::{DependOnLoanModifier, LoanModifier};
use kernel::prelude::entity::{BookId, DueDate, Loan, LoanPeriod, LoanStatus, UserId};
use kernel::KernelError;

use crate::service::to_json;
use crate::transfer::{
    GetLoanDto, GetLoanFromBookIdDto, GetLoanFromUserIdDto, LendBookDto, LoanDto,
    ReturnBookDto, ReturnedLoanDto,
};

pub trait GetLoanService: 'static + Sync + Send + DependOnLoanQuery {
    fn get_loan(&self, dto: GetLoanDto) -> error_stack::Result<Option<LoanDto>, KernelError> {
        let book_id = BookId::new(dto.book_id);
        let user_id = UserId::new(dto.user_id);
        let loan = self.loan_query().find_by_id(&book_id, &user_id)?;
        Ok(loan.map(LoanDto::from))
    }

    fn get_loans_from_book(
        &self,
        dto: GetLoanFromBookIdDto,
    ) -> error_stack::Result<Vec<LoanDto>, KernelError> {
        let book_id = BookId::new(dto.book_id);
        let loans = self.loan_query().find_by_book_id(&book_id)?;
        Ok(loans.into_iter().map(LoanDto::from).collect())
    }

    fn get_loans_from_user(
        &self,
        dto: GetLoanFromUserIdDto,
    ) -> error_stack::Result<Vec<LoanDto>, KernelError> {
        let user_id = UserId::new(dto.user_id);
        let loans = self.loan_query().find_by_user_id(&user_id)?;
        Ok(loans.into_iter().map(LoanDto::from).collect())
    }

    fn get_all_loans(&self) -> error_stack::Result<Vec<LoanDto>, KernelError> {
        let loans = self.loan_query().find_all()?;
        Ok(loans.into_iter().map(LoanDto::from).collect())
    }
}

impl<T> GetLoanService for T where T: DependOnLoanQuery {}

pub trait PrintLoanService: 'static + Sync + Send + GetLoanService {
    fn print_all_loans(&self) -> error_stack::Result<(), KernelError> {
        let loans = self.get_all_loans()?;
        info!("Loans: {}", to_json(&loans)?);
        Ok(())
    }
}

impl<T> PrintLoanService for T where T: GetLoanService {}

pub trait LendBookService:
    'static
    + Sync
    + Send
    + DependOnBookQuery
    + DependOnUserQuery
    + DependOnLoanModifier
    + DependOnClock
{
    #[tracing::instrument(skip_all, fields(book_id = %dto.book_id, user_id = %dto.user_id))]
    fn lend_book(&mut self, dto: LendBookDto) -> error_stack::Result<LoanDto, KernelError> {
        let book_id = BookId::new(dto.book_id);
        let user_id = UserId::new(dto.user_id);
        let period = match dto.period {
            Some(days) => LoanPeriod::try_new(days)?,
            None => LoanPeriod::default(),
        };

        let book = self.book_query().find_by_id(&book_id)?.ok_or_else(|| {
            Report::new(KernelError::BookNotFound)
                .attach_printable(format!("Book {book_id} is not in the catalog"))
        })?;
        if self.user_query().find_by_id(&user_id)?.is_none() {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("User {user_id} not found")));
        }

        let today = self.clock().today();
        let due_date = DueDate::after(today, &period).ok_or_else(|| {
            Report::new(KernelError::Internal).attach_printable(format!(
                "Loan period of {} days from {today} is out of range",
                period.as_ref()
            ))
        })?;
        let loan = Loan::new(book_id, user_id, book.title().clone(), due_date);
        self.loan_modifier().create(loan.clone())?;

        info!(
            "Book {} lent until {}",
            loan.title().as_ref(),
            loan.due_date().as_ref()
        );
        Ok(LoanDto::from(loan))
    }
}

impl<T> LendBookService for T where
    T: DependOnBookQuery + DependOnUserQuery + DependOnLoanModifier + DependOnClock
{
}

pub trait ReturnBookService:
    'static + Sync + Send + DependOnLoanQuery + DependOnLoanModifier + DependOnClock
{
    /// Only the loan being returned is checked for overdue. A pair without a
    /// matching loan is a no-op and yields `None`.
    #[tracing::instrument(skip_all, fields(book_id = %dto.book_id, user_id = %dto.user_id))]
    fn return_book(
        &mut self,
        dto: ReturnBookDto,
    ) -> error_stack::Result<Option<ReturnedLoanDto>, KernelError> {
        let book_id = BookId::new(dto.book_id);
        let user_id = UserId::new(dto.user_id);

        let Some(loan) = self.loan_query().find_by_id(&book_id, &user_id)? else {
            debug!("No active loan of book {book_id} to user {user_id}, nothing to return");
            return Ok(None);
        };

        let status = loan.status(&self.clock().today());
        match status {
            LoanStatus::Overdue => warn!("Book {} is overdue", loan.title().as_ref()),
            LoanStatus::OnTime => info!("Book {} returned on time", loan.title().as_ref()),
        }
        let loan = self.loan_modifier().delete(&book_id, &user_id)?;
        info!("Book {} returned to the library", loan.title().as_ref());

        Ok(Some(ReturnedLoanDto {
            loan: LoanDto::from(loan),
            status,
        }))
    }
}

impl<T> ReturnBookService for T where
    T: DependOnLoanQuery + DependOnLoanModifier + DependOnClock
{
}

/// Removes loans on behalf of the library when their book or borrower is deleted.
pub(crate) fn force_return<T>(
    module: &mut T,
    loans: Vec<Loan>,
) -> error_stack::Result<(), KernelError>
where
    T: DependOnLoanModifier + DependOnClock + ?Sized,
{
    let today = module.clock().today();
    for loan in loans {
        let status = loan.status(&today);
        module
            .loan_modifier()
            .delete(loan.book_id(), loan.user_id())?;
        info!(
            "Book {} ({status}) returned for technical reasons by the library",
            loan.title().as_ref()
        );
    }
    Ok(())
}
