mod due_date;
mod period;
mod status;

pub use self::{due_date::*, period::*, status::*};
use destructure::Destructure;
use time::Date;
use vodca::References;

use crate::entity::{BookId, BookTitle, UserId};

/// An active checkout. The ledger holds at most one per book.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Loan {
    book_id: BookId,
    user_id: UserId,
    title: BookTitle,
    due_date: DueDate,
}

impl Loan {
    pub fn new(book_id: BookId, user_id: UserId, title: BookTitle, due_date: DueDate) -> Self {
        Self {
            book_id,
            user_id,
            title,
            due_date,
        }
    }

    pub fn status(&self, today: &Date) -> LoanStatus {
        if self.due_date.is_before(today) {
            LoanStatus::Overdue
        } else {
            LoanStatus::OnTime
        }
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use time::Date;

    use crate::entity::{BookId, BookTitle, DueDate, Loan, LoanPeriod, LoanStatus, UserId};

    fn loan_due(due: Date) -> Loan {
        Loan::new(
            BookId::generate(),
            UserId::generate(),
            BookTitle::new("Flowers for Algernon"),
            DueDate::new(due),
        )
    }

    #[test]
    fn due_date_is_two_weeks_by_default() {
        let due = DueDate::after(date!(2024 - 02 - 20), &LoanPeriod::default());
        assert_eq!(due, Some(DueDate::new(date!(2024 - 03 - 05))));
    }

    #[test]
    fn due_date_overflow_is_none() {
        assert_eq!(DueDate::after(Date::MAX, &LoanPeriod::new(1)), None);
        assert_eq!(
            DueDate::after(date!(2024 - 02 - 20), &LoanPeriod::new(i64::MAX / 1000)),
            None
        );
    }

    #[test]
    fn returned_on_due_date_is_on_time() {
        let loan = loan_due(date!(2024 - 03 - 05));
        assert_eq!(loan.status(&date!(2024 - 03 - 04)), LoanStatus::OnTime);
        assert_eq!(loan.status(&date!(2024 - 03 - 05)), LoanStatus::OnTime);
    }

    #[test]
    fn returned_after_due_date_is_overdue() {
        let loan = loan_due(date!(2024 - 03 - 05));
        assert_eq!(loan.status(&date!(2024 - 03 - 06)), LoanStatus::Overdue);
    }
}
