//! Core error types for unbudget-core.
//!
//! Errors fall into three families that callers are expected to branch on:
//! validation errors (bad user input), domain rejections (expected outcomes
//! such as logging the same habit twice in one day) and persistence failures
//! (storage I/O). Only the last family is retryable.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Core error type for unbudget-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Bad user input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Rejected tracker action
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    /// Rejected projection request
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// Storage read/write failure
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CoreError {
    /// Whether retrying the same action may succeed without user correction.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CoreError::Persistence(_))
    }
}

/// Validation errors for user-supplied input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Input could not be parsed as a number
    #[error("Please enter a valid {field} (got '{input}')")]
    NotANumber { field: &'static str, input: String },

    /// Age outside 1-120
    #[error("Age must be between 1 and 120 (got {0})")]
    AgeOutOfRange(i64),

    /// Spend amount zero or negative
    #[error("{field} must be greater than zero (got {value})")]
    NonPositiveSpend { field: &'static str, value: f64 },

    /// Empty habit name
    #[error("Habit name must not be empty")]
    EmptyHabitName,
}

/// Expected rejections from tracker actions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// Habit already credited on this calendar day
    #[error("You already logged avoiding {habit} today ({date}). Come back tomorrow to continue your streak!")]
    AlreadyLoggedToday { habit: String, date: NaiveDate },

    /// Habit is not tracked in the profile
    #[error("'{0}' is not one of your tracked habits")]
    UnknownHabit(String),
}

/// Streak engine rejection for a same-day repeat log.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("already logged on {0}")]
pub struct AlreadyLoggedToday(pub NaiveDate);

/// Projection errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// Target age not strictly after the current age
    #[error("The target age ({target}) must be greater than your current age ({current})")]
    InvalidRange { current: u32, target: u32 },

    /// Annual rate not usable in the annuity formula
    #[error("Invalid annual rate: {0}")]
    InvalidRate(f64),
}

/// Storage failures. These are retryable: the caller still owns the value it
/// tried to write.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Failed to open the backing database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Failed to read a stored value
    #[error("Failed to read '{key}': {source}")]
    ReadFailed {
        key: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Failed to write a stored value
    #[error("Failed to write '{key}': {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Stored data is not a valid profile
    #[error("Stored data under '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Profile could not be encoded
    #[error("Failed to encode profile: {0}")]
    Encode(#[source] serde_json::Error),

    /// Data directory could not be created
    #[error("Data directory unavailable at {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// Whether the database was busy or locked by another writer.
    pub fn is_locked(&self) -> bool {
        match self {
            PersistenceError::OpenFailed { source, .. }
            | PersistenceError::ReadFailed { source, .. }
            | PersistenceError::WriteFailed { source, .. } => matches!(
                source.sqlite_error_code(),
                Some(rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked)
            ),
            _ => false,
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_persistence_is_retryable() {
        let persistence: CoreError = PersistenceError::WriteFailed {
            key: "@user_data".into(),
            source: rusqlite::Error::InvalidQuery,
        }
        .into();
        assert!(persistence.is_retryable());

        let validation: CoreError = ValidationError::AgeOutOfRange(130).into();
        assert!(!validation.is_retryable());

        let rejected: CoreError = TrackerError::UnknownHabit("Uber".into()).into();
        assert!(!rejected.is_retryable());
    }

    #[test]
    fn already_logged_message_names_habit() {
        let err = TrackerError::AlreadyLoggedToday {
            habit: "DoorDash".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("DoorDash"));
        assert!(msg.contains("2024-03-01"));
    }
}
