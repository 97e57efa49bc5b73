//! Language-test validity arithmetic.

use chrono::{Months, NaiveDate};

/// Language test results are accepted for this long.
pub const VALIDITY_MONTHS: u32 = 24;

/// Where a test date stands relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestDateStatus {
    /// The reported date has not happened yet; reject the input.
    FutureDate,
    /// Past the validity window.
    Expired { expiry: NaiveDate },
    /// Valid, but 3 months or less remain.
    ExpiringSoon {
        expiry: NaiveDate,
        months_remaining: i64,
    },
    /// Comfortably valid.
    Valid { expiry: NaiveDate },
}

impl TestDateStatus {
    pub fn is_expired(self) -> bool {
        matches!(self, Self::Expired { .. })
    }
}

/// Classify a test date. Months remaining are counted in 30-day blocks,
/// rounded down.
pub fn test_date_status(test_date: NaiveDate, today: NaiveDate) -> TestDateStatus {
    if test_date > today {
        return TestDateStatus::FutureDate;
    }
    // Month arithmetic saturates at the calendar edge, which cannot occur
    // for plausible test dates.
    let expiry = test_date
        .checked_add_months(Months::new(VALIDITY_MONTHS))
        .unwrap_or(test_date);
    if today > expiry {
        return TestDateStatus::Expired { expiry };
    }
    let months_remaining = (expiry - today).num_days() / 30;
    if months_remaining <= 3 {
        TestDateStatus::ExpiringSoon {
            expiry,
            months_remaining,
        }
    } else {
        TestDateStatus::Valid { expiry }
    }
}
