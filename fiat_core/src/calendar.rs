//! Whole-day calendar arithmetic.
//!
//! Everything above this module reasons in calendar days: timestamps are
//! truncated before differencing so that a day number never changes with
//! the time of day a query happens to run.

use chrono::{DateTime, NaiveDate, Utc};

/// Signed number of whole calendar days from `start` to `today`
pub fn elapsed_days(start: NaiveDate, today: NaiveDate) -> i64 {
    (today - start).num_days()
}

/// Map a start date and a query date to a 1-based program day number
///
/// Day 1 is the start date itself. The result is clamped into
/// `[1, total_days]`: a start date in the future (or clock skew) yields 1,
/// and dates past the end of the program yield `total_days`.
pub fn day_number(start: NaiveDate, today: NaiveDate, total_days: u32) -> u32 {
    let offset = elapsed_days(start, today) + 1;
    offset.clamp(1, i64::from(total_days)) as u32
}

/// Truncate a UTC timestamp to its calendar day
pub fn start_of_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}
