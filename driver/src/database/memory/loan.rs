use std::collections::hash_map::Entry;
use std::collections::HashMap;

use error_stack::Report;
use kernel::interface::query::LoanQuery;
use kernel::interface::update::LoanModifier;
use kernel::prelude::entity::{BookId, Loan, UserId};
use kernel::KernelError;

/// The lending ledger. Keyed by book so a book can never carry two active loans.
#[derive(Debug, Default)]
pub struct InMemoryLoanRepository {
    loans: HashMap<BookId, Loan>,
}

impl LoanQuery for InMemoryLoanRepository {
    fn find_by_id(
        &self,
        book_id: &BookId,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Loan>, KernelError> {
        Ok(self
            .loans
            .get(book_id)
            .filter(|loan| loan.user_id() == user_id)
            .cloned())
    }

    fn find_by_book_id(&self, book_id: &BookId) -> error_stack::Result<Vec<Loan>, KernelError> {
        Ok(self.loans.get(book_id).cloned().into_iter().collect())
    }

    fn find_by_user_id(&self, user_id: &UserId) -> error_stack::Result<Vec<Loan>, KernelError> {
        Ok(self
            .loans
            .values()
            .filter(|loan| loan.user_id() == user_id)
            .cloned()
            .collect())
    }

    fn find_all(&self) -> error_stack::Result<Vec<Loan>, KernelError> {
        Ok(self.loans.values().cloned().collect())
    }
}

impl LoanModifier for InMemoryLoanRepository {
    fn create(&mut self, loan: Loan) -> error_stack::Result<(), KernelError> {
        match self.loans.entry(loan.book_id().clone()) {
            Entry::Occupied(entry) => Err(Report::new(KernelError::BookAlreadyLent)
                .attach_printable(format!(
                    "Book {} is already lent to user {}",
                    entry.key(),
                    entry.get().user_id()
                ))),
            Entry::Vacant(entry) => {
                entry.insert(loan);
                Ok(())
            }
        }
    }

    fn delete(
        &mut self,
        book_id: &BookId,
        user_id: &UserId,
    ) -> error_stack::Result<Loan, KernelError> {
        match self.loans.entry(book_id.clone()) {
            Entry::Occupied(entry) if entry.get().user_id() == user_id => Ok(entry.remove()),
            _ => Err(Report::new(KernelError::NotFound).attach_printable(format!(
                "No loan of book {book_id} to user {user_id}"
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::query::LoanQuery;
    use kernel::interface::update::LoanModifier;
    use kernel::prelude::entity::{BookId, BookTitle, DueDate, Loan, UserId};
    use kernel::KernelError;
    use time::macros::date;

    use crate::database::memory::loan::InMemoryLoanRepository;

    fn loan(book_id: &BookId, user_id: &UserId) -> Loan {
        Loan::new(
            book_id.clone(),
            user_id.clone(),
            BookTitle::new("Flowers for Algernon"),
            DueDate::new(date!(2024 - 03 - 05)),
        )
    }

    #[test]
    fn basic_modification() -> error_stack::Result<(), KernelError> {
        let mut ledger = InMemoryLoanRepository::default();
        let book_id = BookId::generate();
        let user_id = UserId::generate();

        ledger.create(loan(&book_id, &user_id))?;
        assert_eq!(
            ledger.find_by_id(&book_id, &user_id)?,
            Some(loan(&book_id, &user_id))
        );
        assert_eq!(ledger.find_by_book_id(&book_id)?.len(), 1);
        assert_eq!(ledger.find_by_user_id(&user_id)?.len(), 1);

        let removed = ledger.delete(&book_id, &user_id)?;
        assert_eq!(removed, loan(&book_id, &user_id));
        assert!(ledger.find_all()?.is_empty());

        Ok(())
    }

    #[test]
    fn second_loan_of_same_book_fails() -> error_stack::Result<(), KernelError> {
        let mut ledger = InMemoryLoanRepository::default();
        let book_id = BookId::generate();
        let first = UserId::generate();

        ledger.create(loan(&book_id, &first))?;
        let report = ledger.create(loan(&book_id, &UserId::generate())).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::BookAlreadyLent);
        assert_eq!(ledger.find_all()?, vec![loan(&book_id, &first)]);

        Ok(())
    }

    #[test]
    fn mismatched_user_does_not_match() -> error_stack::Result<(), KernelError> {
        let mut ledger = InMemoryLoanRepository::default();
        let book_id = BookId::generate();
        let user_id = UserId::generate();
        let stranger = UserId::generate();
        ledger.create(loan(&book_id, &user_id))?;

        assert!(ledger.find_by_id(&book_id, &stranger)?.is_none());
        let report = ledger.delete(&book_id, &stranger).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::NotFound);
        assert_eq!(ledger.find_all()?.len(), 1);

        Ok(())
    }

    #[test]
    fn one_user_may_hold_many_loans() -> error_stack::Result<(), KernelError> {
        let mut ledger = InMemoryLoanRepository::default();
        let user_id = UserId::generate();
        for _ in 0..3 {
            ledger.create(loan(&BookId::generate(), &user_id))?;
        }
        assert_eq!(ledger.find_by_user_id(&user_id)?.len(), 3);
        assert!(ledger.find_by_user_id(&UserId::generate())?.is_empty());

        Ok(())
    }
}
