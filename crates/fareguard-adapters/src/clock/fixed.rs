//! Fixed clock adapter for testing.

use std::sync::{Arc, RwLock};

use chrono::{Duration, NaiveDate};

use fareguard_core::application::ports::Clock;

/// Pinned clock for testing.
///
/// Cloneable: every clone shares the same underlying date, so a test can
/// keep one handle, hand a clone to the service, and move time later.
#[derive(Debug, Clone)]
pub struct FixedClock {
    today: Arc<RwLock<NaiveDate>>,
}

impl FixedClock {
    /// Create a clock pinned to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Arc::new(RwLock::new(today)),
        }
    }

    /// Re-pin the clock to a new date.
    pub fn set(&self, today: NaiveDate) {
        *self.today.write().unwrap() = today;
    }

    /// Move the pinned date forward (or back, with a negative argument).
    pub fn advance_days(&self, days: i64) {
        let mut today = self.today.write().unwrap();
        *today = *today + Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.read().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reports_the_pinned_date() {
        let clock = FixedClock::new(date(2026, 8, 6));
        assert_eq!(clock.today(), date(2026, 8, 6));
    }

    #[test]
    fn clones_share_the_same_time() {
        let clock = FixedClock::new(date(2026, 8, 6));
        let handle = clock.clone();

        handle.advance_days(3);
        assert_eq!(clock.today(), date(2026, 8, 9));

        clock.set(date(2027, 1, 1));
        assert_eq!(handle.today(), date(2027, 1, 1));
    }

    #[test]
    fn advance_crosses_month_and_year_boundaries() {
        let clock = FixedClock::new(date(2026, 12, 31));
        clock.advance_days(1);
        assert_eq!(clock.today(), date(2027, 1, 1));
    }
}
