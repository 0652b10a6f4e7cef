//! Calendar helpers: weekday lookup and month succession.
//!
//! Dates follow the proleptic Gregorian calendar.

use chrono::{Datelike, NaiveDate};

use crate::YearMonth;

/// Weekdays are numbered Monday=0 .. Sunday=6; values below this are
/// working days.
pub const FIRST_WEEKEND_DAY: u32 = 5;

/// Day of the week for a calendar date, Monday=0 .. Sunday=6.
///
/// Returns `None` when the date does not exist (e.g. April 31st).
///
/// # Example
/// ```
/// use tracemfl::weekday;
/// assert_eq!(weekday(2024, 1, 1), Some(0)); // Monday
/// assert_eq!(weekday(2024, 2, 29), Some(3)); // Thursday, leap day
/// assert_eq!(weekday(2023, 2, 29), None);
/// ```
pub fn weekday(year: i32, month: u32, day: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.weekday().num_days_from_monday())
}

/// Whether `weekday` (Monday=0) falls on Monday-Friday.
pub fn is_working_day(weekday: u32) -> bool {
    weekday < FIRST_WEEKEND_DAY
}

pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Number of days in a month, or `None` for a month outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = YearMonth::new(year, month).next();
    let first_of_next = NaiveDate::from_ymd_opt(next.year, next.month, 1)?;
    u32::try_from(first_of_next.signed_duration_since(first).num_days()).ok()
}

impl YearMonth {
    /// The calendar month right after this one. December rolls over to
    /// January of the following year.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// Whether this month comes exactly one calendar month after `previous`.
    pub fn follows(self, previous: YearMonth) -> bool {
        previous.next() == self
    }
}
