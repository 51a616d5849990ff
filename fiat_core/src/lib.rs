#![forbid(unsafe_code)]

//! Core domain model and business logic for the Fiat consecration companion.
//!
//! This crate provides:
//! - Domain types (phases, daily content, prayers, feasts, journeys)
//! - Calendar arithmetic and the day-number clamp
//! - Static program content and the day resolver
//! - Feast-date solving (start dates from target feasts)
//! - Journey progression (access gating, completion)
//! - Bilingual prayer formatting
//! - Persistence (journey store, journal, CSV export)

pub mod types;
pub mod error;
pub mod calendar;
pub mod phases;
pub mod content;
pub mod feast;
pub mod journey;
pub mod format;
pub mod config;
pub mod logging;
pub mod state;
pub mod journal;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use phases::{Phase, PROGRAM_DAYS, START_OFFSET_DAYS};
pub use content::{build_default_program, day_view, get_default_program, ordinal_label, DayView};
pub use feast::{feast_by_id, FEASTS};
pub use format::{formatted, PAIR_SEPARATOR};
pub use config::Config;
pub use state::JourneyStore;
pub use journal::{read_entries, EntrySink, JsonlJournal};
pub use export::journal_to_csv;
