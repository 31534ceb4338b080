use serde::Serialize;
use time::Date;
use uuid::Uuid;

use kernel::prelude::entity::{DestructLoan, Loan, LoanStatus};

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct LoanDto {
    pub book_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub due_date: Date,
}

impl From<Loan> for LoanDto {
    fn from(value: Loan) -> Self {
        let DestructLoan {
            book_id,
            user_id,
            title,
            due_date,
        } = value.into_destruct();
        Self {
            book_id: book_id.into(),
            user_id: user_id.into(),
            title: title.into(),
            due_date: due_date.into(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ReturnedLoanDto {
    pub loan: LoanDto,
    pub status: LoanStatus,
}

pub struct GetLoanDto {
    pub book_id: Uuid,
    pub user_id: Uuid,
}

pub struct GetLoanFromBookIdDto {
    pub book_id: Uuid,
}

pub struct GetLoanFromUserIdDto {
    pub user_id: Uuid,
}

pub struct LendBookDto {
    pub book_id: Uuid,
    pub user_id: Uuid,
    /// Loan length in days; two weeks when absent.
    pub period: Option<i64>,
}

pub struct ReturnBookDto {
    pub book_id: Uuid,
    pub user_id: Uuid,
}
