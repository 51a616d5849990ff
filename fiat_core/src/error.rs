//! Error types for the fiat_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fiat_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Program content validation error
    #[error("Content validation error: {0}")]
    ContentValidation(String),

    /// Journey/store management error
    #[error("State error: {0}")]
    State(String),

    /// Day number outside the program range
    #[error("Day {day} is outside the program range (1..={max})")]
    DayOutOfRange { day: u32, max: u32 },

    /// Bilingual text sides have unequal line counts
    #[error("Bilingual line count mismatch: {latin} Latin lines vs {english} English lines")]
    LineMismatch { latin: usize, english: usize },

    /// Generic error
    #[error("{0}")]
    Other(String),
}
