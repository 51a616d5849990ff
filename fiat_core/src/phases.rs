//! The static phase table: an ordered partition of days 1..=34.
//!
//! Twelve preliminary days, three weeks of seven, and the consecration
//! day itself. The ranges are contiguous and non-overlapping, so the
//! first matching range wins.

use std::ops::RangeInclusive;

/// Total length of the program in days
pub const PROGRAM_DAYS: u32 = 34;

/// Days subtracted from a feast date to obtain the program start date,
/// so that day 34 lands on the feast itself
pub const START_OFFSET_DAYS: i64 = 33;

/// One of the five fixed phases of the program
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Preliminary,
    KnowledgeOfSelf,
    KnowledgeOfMary,
    KnowledgeOfJesus,
    Consecration,
}

impl Phase {
    /// All phases in program order
    pub const ALL: [Phase; 5] = [
        Phase::Preliminary,
        Phase::KnowledgeOfSelf,
        Phase::KnowledgeOfMary,
        Phase::KnowledgeOfJesus,
        Phase::Consecration,
    ];

    /// The phase whose day range contains `day`, or None outside 1..=34
    pub fn for_day(day: u32) -> Option<Phase> {
        Phase::ALL
            .into_iter()
            .find(|phase| phase.day_range().contains(&day))
    }

    /// Inclusive day range owned by this phase
    pub fn day_range(self) -> RangeInclusive<u32> {
        match self {
            Phase::Preliminary => 1..=12,
            Phase::KnowledgeOfSelf => 13..=19,
            Phase::KnowledgeOfMary => 20..=26,
            Phase::KnowledgeOfJesus => 27..=33,
            Phase::Consecration => 34..=34,
        }
    }

    /// Number of days in this phase
    pub fn day_count(self) -> u32 {
        self.day_range().end() - self.day_range().start() + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::Preliminary => "Preliminary Days",
            Phase::KnowledgeOfSelf => "First Week",
            Phase::KnowledgeOfMary => "Second Week",
            Phase::KnowledgeOfJesus => "Third Week",
            Phase::Consecration => "Consecration Day",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Phase::Preliminary => "Emptying of the Spirit of the World",
            Phase::KnowledgeOfSelf => "Knowledge of Self",
            Phase::KnowledgeOfMary => "Knowledge of Mary",
            Phase::KnowledgeOfJesus => "Knowledge of Jesus Christ",
            Phase::Consecration => "Total Consecration",
        }
    }

    pub fn theme(self) -> &'static str {
        match self {
            Phase::Preliminary => {
                "Renounce the spirit of the world, which is contrary to the spirit of Jesus Christ."
            }
            Phase::KnowledgeOfSelf => {
                "Examine your own weakness, with humility and contrition rather than discouragement."
            }
            Phase::KnowledgeOfMary => {
                "Study the one whom God chose as the surest, shortest way to her Son."
            }
            Phase::KnowledgeOfJesus => {
                "Fix your gaze on Jesus Christ, the final end of this whole devotion."
            }
            Phase::Consecration => {
                "Give yourself entirely, and renew the gift often."
            }
        }
    }

    /// Ordered prayer ids belonging to this phase's daily exercises
    pub fn prayer_ids(self) -> &'static [&'static str] {
        match self {
            Phase::Preliminary => &[
                "veni_creator",
                "ave_maris_stella",
                "magnificat",
                "gloria_patri",
            ],
            Phase::KnowledgeOfSelf => {
                &["litany_holy_spirit", "ave_maris_stella", "litany_loreto"]
            }
            Phase::KnowledgeOfMary => &[
                "litany_holy_spirit",
                "ave_maris_stella",
                "litany_loreto",
                "montfort_prayer_to_mary",
            ],
            Phase::KnowledgeOfJesus => &[
                "litany_holy_spirit",
                "ave_maris_stella",
                "litany_loreto",
                "o_jesus_living_in_mary",
            ],
            Phase::Consecration => &["veni_creator", "ave_maris_stella", "consecration_act"],
        }
    }
}
