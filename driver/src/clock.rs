use std::sync::{Arc, RwLock};

use kernel::interface::clock::Clock;
use time::{Date, Duration, OffsetDateTime};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc().date()
    }
}

/// Clock pinned to a date. Clones share the same date, so a handle kept
/// outside the library can move time forward.
#[derive(Debug, Clone)]
pub struct FixedClock(Arc<RwLock<Date>>);

impl FixedClock {
    pub fn new(today: Date) -> Self {
        Self(Arc::new(RwLock::new(today)))
    }

    pub fn set(&self, today: Date) {
        let mut guard = self.0.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = today;
    }

    pub fn advance(&self, by: Duration) {
        let today = self.today();
        self.set(today.saturating_add(by));
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        *self.0.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::clock::Clock;
    use time::macros::date;
    use time::Duration;

    use crate::clock::FixedClock;

    #[test]
    fn clones_share_the_date() {
        let clock = FixedClock::new(date!(2024 - 01 - 01));
        let handle = clock.clone();
        handle.advance(Duration::days(15));
        assert_eq!(clock.today(), date!(2024 - 01 - 16));
    }
}
