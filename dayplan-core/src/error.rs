//! Error types for the dayplan ecosystem.

use thiserror::Error;

/// Errors that can occur in dayplan operations.
#[derive(Error, Debug)]
pub enum DayPlanError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid activity: {0}")]
    InvalidActivity(String),

    #[error("Calendar has not been loaded yet")]
    NotLoaded,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for dayplan operations.
pub type DayPlanResult<T> = Result<T, DayPlanError>;
