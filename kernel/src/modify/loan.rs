use crate::entity::{BookId, Loan, UserId};
use crate::KernelError;

pub trait LoanModifier: 'static + Sync + Send {
    /// Fails with [`KernelError::BookAlreadyLent`] while the book has an active loan.
    fn create(&mut self, loan: Loan) -> error_stack::Result<(), KernelError>;
    /// Fails with [`KernelError::NotFound`] when no loan binds this book to this user.
    fn delete(
        &mut self,
        book_id: &BookId,
        user_id: &UserId,
    ) -> error_stack::Result<Loan, KernelError>;
}

pub trait DependOnLoanModifier: 'static + Sync + Send {
    type LoanModifier: LoanModifier;
    fn loan_modifier(&mut self) -> &mut Self::LoanModifier;
}
