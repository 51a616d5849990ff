//! Feast-date solving: mapping recurring feast dates to program start dates.
//!
//! Day 34 of the program falls on the feast, so the valid start date for a
//! given occurrence is the feast minus [`START_OFFSET_DAYS`] days.

use crate::phases::START_OFFSET_DAYS;
use crate::types::FeastDate;
use chrono::{Datelike, Duration, NaiveDate};

/// Built-in Marian feasts suitable as consecration targets
pub const FEASTS: &[FeastDate] = &[
    FeastDate {
        id: "annunciation",
        name: "The Annunciation",
        month: 3,
        day: 25,
        description: "The angel Gabriel announces the Incarnation to Mary.",
    },
    FeastDate {
        id: "visitation",
        name: "The Visitation",
        month: 5,
        day: 31,
        description: "Mary visits her cousin Elizabeth.",
    },
    FeastDate {
        id: "mount_carmel",
        name: "Our Lady of Mount Carmel",
        month: 7,
        day: 16,
        description: "Patronal feast of the Carmelite order.",
    },
    FeastDate {
        id: "assumption",
        name: "The Assumption",
        month: 8,
        day: 15,
        description: "Mary is assumed body and soul into heaven.",
    },
    FeastDate {
        id: "nativity_of_mary",
        name: "The Nativity of Mary",
        month: 9,
        day: 8,
        description: "The birth of the Blessed Virgin Mary.",
    },
    FeastDate {
        id: "presentation_of_mary",
        name: "The Presentation of Mary",
        month: 11,
        day: 21,
        description: "Mary is presented in the Temple as a child.",
    },
    FeastDate {
        id: "immaculate_conception",
        name: "The Immaculate Conception",
        month: 12,
        day: 8,
        description: "Mary is conceived without original sin.",
    },
    FeastDate {
        id: "guadalupe",
        name: "Our Lady of Guadalupe",
        month: 12,
        day: 12,
        description: "The apparitions to St. Juan Diego at Tepeyac.",
    },
];

/// Look up a built-in feast by its string id
pub fn feast_by_id(id: &str) -> Option<&'static FeastDate> {
    FEASTS.iter().find(|f| f.id == id)
}

impl FeastDate {
    /// The feast's date within a given year
    ///
    /// None only when the month/day combination does not exist in that
    /// year (a Feb 29 feast outside a leap year); construction must never
    /// panic.
    pub fn date_in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    /// The valid program start date for this feast in a given year
    pub fn start_date_in_year(&self, year: i32) -> Option<NaiveDate> {
        self.date_in_year(year)
            .map(|d| d - Duration::days(START_OFFSET_DAYS))
    }

    /// The next occurrence of the feast strictly after `from`
    ///
    /// This year's date if still ahead, otherwise the next year in which
    /// the month/day exists. Scans a handful of years so a Feb 29 feast
    /// lands on the next leap year rather than panicking.
    pub fn next_occurrence(&self, from: NaiveDate) -> NaiveDate {
        for year in from.year()..=from.year() + 8 {
            if let Some(date) = self.date_in_year(year) {
                if date > from {
                    return date;
                }
            }
        }
        // Unreachable for any real month/day: every 8-year window holds a
        // leap year except across the 1900/2100-style century gaps, and no
        // built-in feast falls on Feb 29.
        unreachable!("no occurrence of {}/{} within 8 years", self.month, self.day)
    }

    /// Start date for the next occurrence of the feast after `from`
    pub fn next_start_date(&self, from: NaiveDate) -> NaiveDate {
        self.next_occurrence(from) - Duration::days(START_OFFSET_DAYS)
    }

    /// Whether `date` is a valid start date for this feast
    ///
    /// Both the feast in `date`'s year and the following year are checked:
    /// a start date near year-end belongs to next year's feast.
    pub fn is_valid_start_date(&self, date: NaiveDate) -> bool {
        [date.year(), date.year() + 1]
            .into_iter()
            .any(|year| self.start_date_in_year(year) == Some(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_feast_lookup() {
        assert!(feast_by_id("annunciation").is_some());
        assert!(feast_by_id("assumption").is_some());
        assert!(feast_by_id("unknown_feast").is_none());
    }

    #[test]
    fn test_start_date_round_trip() {
        // startDateFor(feast, year) + 33 days == dateFor(feast, year)
        for feast in FEASTS {
            for year in [2024, 2025, 2026] {
                let start = feast.start_date_in_year(year).unwrap();
                let target = feast.date_in_year(year).unwrap();
                assert_eq!(start + Duration::days(START_OFFSET_DAYS), target);
            }
        }
    }

    #[test]
    fn test_annunciation_start_date() {
        let feast = feast_by_id("annunciation").unwrap();
        // March 25 minus 33 days is February 20 (non-leap year)
        assert_eq!(feast.start_date_in_year(2025), Some(date(2025, 2, 20)));
        // and February 21 in a leap year
        assert_eq!(feast.start_date_in_year(2024), Some(date(2024, 2, 21)));
    }

    #[test]
    fn test_next_occurrence_before_feast() {
        let feast = feast_by_id("annunciation").unwrap();
        let next = feast.next_occurrence(date(2025, 1, 10));
        assert_eq!(next, date(2025, 3, 25));
    }

    #[test]
    fn test_next_occurrence_rolls_to_next_year() {
        // Evaluated two days after this year's feast
        let feast = feast_by_id("annunciation").unwrap();
        let next = feast.next_occurrence(date(2025, 3, 27));
        assert_eq!(next, date(2026, 3, 25));

        let start = feast.next_start_date(date(2025, 3, 27));
        assert_eq!(start, date(2026, 3, 25) - Duration::days(33));
    }

    #[test]
    fn test_next_occurrence_feast_day_itself_rolls() {
        // Strictly after: the feast day itself yields next year's date
        let feast = feast_by_id("assumption").unwrap();
        let next = feast.next_occurrence(date(2025, 8, 15));
        assert_eq!(next, date(2026, 8, 15));
    }

    #[test]
    fn test_next_occurrence_never_past() {
        let feast = feast_by_id("immaculate_conception").unwrap();
        let mut from = date(2024, 1, 1);
        for _ in 0..40 {
            let next = feast.next_occurrence(from);
            assert!(next > from);
            from = from + Duration::days(37);
        }
    }

    #[test]
    fn test_is_valid_start_date() {
        let feast = feast_by_id("annunciation").unwrap();
        assert!(feast.is_valid_start_date(date(2025, 2, 20)));
        assert!(!feast.is_valid_start_date(date(2025, 2, 21)));
    }

    #[test]
    fn test_is_valid_start_date_across_year_end() {
        // A January feast has its start date in the previous December
        let january_feast = FeastDate {
            id: "test_january",
            name: "Test January Feast",
            month: 1,
            day: 1,
            description: "",
        };
        let start = january_feast.start_date_in_year(2026).unwrap();
        assert_eq!(start.year(), 2025);
        assert!(january_feast.is_valid_start_date(start));
    }

    #[test]
    fn test_leap_day_feast_does_not_panic() {
        // Not in the built-in data, but the solver must tolerate it
        let leap_feast = FeastDate {
            id: "test_leap",
            name: "Test Leap Feast",
            month: 2,
            day: 29,
            description: "",
        };
        assert_eq!(leap_feast.date_in_year(2025), None);
        assert_eq!(leap_feast.date_in_year(2024), Some(date(2024, 2, 29)));
        // Next occurrence from a non-leap year rolls to the next leap year
        assert_eq!(
            leap_feast.next_occurrence(date(2025, 3, 1)),
            date(2028, 2, 29)
        );
    }
}
