//! Core domain types for the Fiat consecration companion.
//!
//! This module defines the fundamental types used throughout the system:
//! - Daily content and prayers
//! - Bilingual text and display modes
//! - Feast dates
//! - The journey aggregate and journal entries

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

// ============================================================================
// Content Types
// ============================================================================

/// The immutable content bundle for a single program day
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DailyContent {
    pub day: u32,
    pub title: String,
    pub meditation: String,
    pub meditation_source: Option<String>,
    pub reflection: String,
}

/// A dual-language string pair representing the same text
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BilingualText {
    pub latin: String,
    pub english: String,
}

impl BilingualText {
    pub fn new(latin: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            latin: latin.into(),
            english: english.into(),
        }
    }
}

/// A prayer definition with a bilingual body
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Prayer {
    pub id: String,
    pub name: String,
    pub text: BilingualText,
}

/// How bilingual text should be rendered
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LanguageMode {
    /// Latin only
    Latin,
    /// English only
    English,
    /// Both languages, Latin leading each paired line
    LatinEnglish,
    /// Both languages, English leading each paired line
    EnglishLatin,
}

impl Default for LanguageMode {
    fn default() -> Self {
        LanguageMode::English
    }
}

// ============================================================================
// Feast Types
// ============================================================================

/// A fixed annual calendar date used as a program completion target
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeastDate {
    pub id: &'static str,
    pub name: &'static str,
    pub month: u32,
    pub day: u32,
    pub description: &'static str,
}

// ============================================================================
// Journey and Journal Types
// ============================================================================

/// One run of the 34-day program: start date plus completion record
///
/// The start date is calendar-day granular; truncation to whole days is
/// what keeps the current day number stable across a single calendar day.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Journey {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub completed_days: BTreeSet<u32>,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A reflection entry for one program day (one-per-day upsert semantics)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JournalEntry {
    pub day: u32,
    pub text: String,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Program Type
// ============================================================================

/// The complete static program: per-day content plus the prayer table
#[derive(Clone, Debug)]
pub struct Program {
    pub days: HashMap<u32, DailyContent>,
    pub prayers: HashMap<String, Prayer>,
}
