//! Errors raised while loading profiles and writing reports
//!
//! The calculation engine itself has no failure modes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown profile section: {0}")]
    UnknownSection(String),

    #[error("unknown field '{field}' in section '{section}'")]
    UnknownField { section: String, field: String },

    #[error("projection horizon of {years} years exceeds the maximum of {max}")]
    HorizonTooLong { years: i64, max: i64 },

    #[error("{count} scenarios requested, at most {max} allowed")]
    TooManyScenarios { count: usize, max: usize },
}
