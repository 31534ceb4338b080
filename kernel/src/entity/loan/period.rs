use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct LoanPeriod(i64);

impl LoanPeriod {
    pub const DEFAULT_DAYS: i64 = 14;
    pub const MAX_DAYS: i64 = 36_500;

    pub fn new(days: impl Into<i64>) -> Self {
        Self(days.into())
    }

    /// Accepts `0..=MAX_DAYS` days, anything else is [`KernelError::Internal`].
    pub fn try_new(days: i64) -> error_stack::Result<Self, KernelError> {
        if !(0..=Self::MAX_DAYS).contains(&days) {
            return Err(Report::new(KernelError::Internal).attach_printable(format!(
                "Loan period must be between 0 and {} days: {days}",
                Self::MAX_DAYS
            )));
        }
        Ok(Self(days))
    }
}

impl Default for LoanPeriod {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DAYS)
    }
}
