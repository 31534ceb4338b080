use serde::{Deserialize, Serialize};
use time::{Date, Duration};
use vodca::{AsRefln, Fromln};

use crate::entity::LoanPeriod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct DueDate(Date);

impl DueDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    /// `None` when the period pushes the date past the representable calendar.
    pub fn after(today: Date, period: &LoanPeriod) -> Option<Self> {
        let days = i32::try_from(*period.as_ref()).ok()?;
        let offset = Duration::DAY.checked_mul(days)?;
        today.checked_add(offset).map(Self)
    }

    pub fn is_before(&self, today: &Date) -> bool {
        self.0 < *today
    }
}
