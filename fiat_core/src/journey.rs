//! Journey progression logic: current day, access gating, completion.
//!
//! All time-dependent methods take `today`/`now` explicitly so that a
//! single call chain samples the clock once and computes consistently.

use crate::calendar;
use crate::phases::PROGRAM_DAYS;
use crate::types::Journey;
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

impl Journey {
    /// Begin a new journey with the given start date
    pub fn new(start_date: NaiveDate, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_date,
            completed_days: BTreeSet::new(),
            is_completed: false,
            completed_at: None,
            created_at: now,
        }
    }

    /// The 1-based program day for a given calendar date, clamped to [1, 34]
    ///
    /// Monotonically non-decreasing as days pass; a future start date (or
    /// clock skew) yields 1 rather than anything negative.
    pub fn current_day(&self, today: NaiveDate) -> u32 {
        calendar::day_number(self.start_date, today, PROGRAM_DAYS)
    }

    /// Whether the start date has arrived
    ///
    /// `current_day` clamps a scheduled future start to 1; callers that
    /// want to render "begins on ..." instead of Day 1 check this first.
    pub fn has_started(&self, today: NaiveDate) -> bool {
        today >= self.start_date
    }

    /// Whether a day may be opened: anything up to and including today's
    /// day, nothing beyond it
    pub fn can_access(&self, day: u32, today: NaiveDate) -> bool {
        (1..=self.current_day(today)).contains(&day)
    }

    /// Mark a day complete
    ///
    /// Rejects out-of-range days explicitly so callers can tell "ignored"
    /// from "succeeded". Returns Ok(true) on first completion of the day,
    /// Ok(false) if it was already complete. Completing day 34 sets the
    /// completion flag and stamps `completed_at` exactly once; after that
    /// the journey is sealed and further calls are no-ops (a restart
    /// replaces it instead).
    pub fn complete_day(&mut self, day: u32, now: DateTime<Utc>) -> Result<bool> {
        if !(1..=PROGRAM_DAYS).contains(&day) {
            return Err(Error::DayOutOfRange {
                day,
                max: PROGRAM_DAYS,
            });
        }

        if self.is_completed {
            return Ok(false);
        }

        let newly_completed = self.completed_days.insert(day);

        if day == PROGRAM_DAYS {
            self.is_completed = true;
            self.completed_at = Some(now);
            tracing::info!("Journey {} completed", self.id);
        }

        if newly_completed {
            tracing::debug!("Marked day {} complete ({} total)", day, self.completed_days.len());
        }

        Ok(newly_completed)
    }

    /// Fraction of the program completed, by completed-day count
    ///
    /// Deliberately count-based rather than calendar-based: a user behind
    /// schedule sees fewer completions than elapsed days.
    pub fn progress(&self) -> f64 {
        self.completed_days.len() as f64 / f64::from(PROGRAM_DAYS)
    }

    /// Number of days not yet completed
    pub fn days_remaining(&self) -> u32 {
        PROGRAM_DAYS - self.completed_days.len() as u32
    }

    /// The smallest accessible day that has not been completed
    ///
    /// None when every accessible day is already done.
    pub fn next_incomplete_day(&self, today: NaiveDate) -> Option<u32> {
        (1..=self.current_day(today)).find(|day| !self.completed_days.contains(day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn journey_starting(start: NaiveDate) -> Journey {
        Journey::new(start, Utc::now())
    }

    #[test]
    fn test_current_day_five_days_in() {
        // Five days after the start date is day 6
        let start = date(2025, 2, 20);
        let journey = journey_starting(start);
        assert_eq!(journey.current_day(start + Duration::days(5)), 6);
    }

    #[test]
    fn test_current_day_clamps_both_ends() {
        let start = date(2025, 2, 20);
        let journey = journey_starting(start);
        assert_eq!(journey.current_day(start - Duration::days(10)), 1);
        assert_eq!(journey.current_day(start + Duration::days(100)), 34);
    }

    #[test]
    fn test_has_started_distinguishes_future_start() {
        let start = date(2025, 2, 20);
        let journey = journey_starting(start);
        assert!(!journey.has_started(start - Duration::days(1)));
        assert!(journey.has_started(start));
        assert!(journey.has_started(start + Duration::days(1)));
        // The clamp still renders day 1 either way
        assert_eq!(journey.current_day(start - Duration::days(1)), 1);
    }

    #[test]
    fn test_can_access_boundary() {
        let start = date(2025, 2, 20);
        let journey = journey_starting(start);
        let today = start + Duration::days(5); // day 6

        for day in 1..=6 {
            assert!(journey.can_access(day, today), "day {} should be open", day);
        }
        for day in 7..=34 {
            assert!(!journey.can_access(day, today), "day {} should be closed", day);
        }
        assert!(!journey.can_access(0, today));
    }

    #[test]
    fn test_complete_day_rejects_out_of_range() {
        let mut journey = journey_starting(date(2025, 2, 20));
        assert!(matches!(
            journey.complete_day(0, Utc::now()),
            Err(Error::DayOutOfRange { day: 0, .. })
        ));
        assert!(matches!(
            journey.complete_day(35, Utc::now()),
            Err(Error::DayOutOfRange { day: 35, .. })
        ));
        assert!(journey.completed_days.is_empty());
    }

    #[test]
    fn test_complete_day_idempotent() {
        let mut journey = journey_starting(date(2025, 2, 20));
        assert!(journey.complete_day(3, Utc::now()).unwrap());
        assert!(!journey.complete_day(3, Utc::now()).unwrap());
        assert_eq!(journey.completed_days.len(), 1);
    }

    #[test]
    fn test_final_day_sets_completion_once() {
        let mut journey = journey_starting(date(2025, 2, 20));
        let first = Utc::now();
        journey.complete_day(34, first).unwrap();

        assert!(journey.is_completed);
        assert_eq!(journey.completed_at, Some(first));

        // Repeat calls must not reset the timestamp
        let later = first + Duration::hours(2);
        journey.complete_day(34, later).unwrap();
        assert_eq!(journey.completed_at, Some(first));
    }

    #[test]
    fn test_completed_flag_only_via_final_day() {
        let mut journey = journey_starting(date(2025, 2, 20));
        for day in 1..=33 {
            journey.complete_day(day, Utc::now()).unwrap();
        }
        assert!(!journey.is_completed);
        assert_eq!(journey.days_remaining(), 1);

        journey.complete_day(34, Utc::now()).unwrap();
        assert!(journey.is_completed);
        assert_eq!(journey.days_remaining(), 0);
        assert!((journey.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_completed_journey_is_sealed() {
        let mut journey = journey_starting(date(2025, 2, 20));
        journey.complete_day(34, Utc::now()).unwrap();
        assert!(journey.is_completed);

        // No further days can be recorded once the journey is complete
        assert!(!journey.complete_day(5, Utc::now()).unwrap());
        assert!(!journey.completed_days.contains(&5));
        assert_eq!(journey.completed_days.len(), 1);
    }

    #[test]
    fn test_progress_counts_completions_not_calendar() {
        let start = date(2025, 2, 20);
        let mut journey = journey_starting(start);
        let today = start + Duration::days(9); // day 10, user behind schedule

        journey.complete_day(1, Utc::now()).unwrap();
        journey.complete_day(2, Utc::now()).unwrap();

        assert_eq!(journey.current_day(today), 10);
        assert!((journey.progress() - 2.0 / 34.0).abs() < f64::EPSILON);
        assert_eq!(journey.days_remaining(), 32);
    }

    #[test]
    fn test_next_incomplete_day_finds_gaps() {
        let start = date(2025, 2, 20);
        let mut journey = journey_starting(start);
        let today = start + Duration::days(4); // day 5

        journey.complete_day(1, Utc::now()).unwrap();
        journey.complete_day(2, Utc::now()).unwrap();
        journey.complete_day(4, Utc::now()).unwrap();

        assert_eq!(journey.next_incomplete_day(today), Some(3));
    }

    #[test]
    fn test_next_incomplete_day_none_when_caught_up() {
        let start = date(2025, 2, 20);
        let mut journey = journey_starting(start);
        let today = start + Duration::days(2); // day 3

        for day in 1..=3 {
            journey.complete_day(day, Utc::now()).unwrap();
        }
        assert_eq!(journey.next_incomplete_day(today), None);
    }

    #[test]
    fn test_next_incomplete_day_is_today_when_behind_by_one() {
        let start = date(2025, 2, 20);
        let mut journey = journey_starting(start);
        let today = start + Duration::days(2); // day 3

        journey.complete_day(1, Utc::now()).unwrap();
        journey.complete_day(2, Utc::now()).unwrap();
        assert_eq!(journey.next_incomplete_day(today), Some(3));
    }
}
