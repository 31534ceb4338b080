use crate::entity::{BookId, Loan, UserId};
use crate::KernelError;

pub trait LoanQuery: Sync + Send + 'static {
    fn find_by_id(
        &self,
        book_id: &BookId,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Loan>, KernelError>;
    fn find_by_book_id(&self, book_id: &BookId) -> error_stack::Result<Vec<Loan>, KernelError>;
    fn find_by_user_id(&self, user_id: &UserId) -> error_stack::Result<Vec<Loan>, KernelError>;
    fn find_all(&self) -> error_stack::Result<Vec<Loan>, KernelError>;
}

pub trait DependOnLoanQuery: Sync + Send + 'static {
    type LoanQuery: LoanQuery;
    fn loan_query(&self) -> &Self::LoanQuery;
}
