// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for cq-core operations.

use thiserror::Error;

/// All possible errors that can occur in cq-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    #[error("chore not found: {0}")]
    ChoreNotFound(i64),

    #[error("reward not found: {0}")]
    RewardNotFound(i64),

    #[error("invalid transition: cannot go from {from} to {to}\n  hint: from '{from}' you can go to: {valid_targets}")]
    InvalidTransition {
        from: String,
        to: String,
        valid_targets: String,
    },

    #[error("not enough points: need {needed}, have {available}")]
    InsufficientPoints { needed: i64, available: i64 },

    #[error("invalid recurrence: '{0}'\n  hint: valid kinds are: daily, weekly, bi-weekly, monthly, custom")]
    InvalidRecurrence(String),

    #[error("invalid day: '{0}'\n  hint: use 'any' or a weekday name such as 'monday'")]
    InvalidDay(String),

    #[error("invalid date: '{0}'\n  hint: dates use the YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{field} must be at least {min} (got {actual})")]
    ValueTooSmall {
        field: &'static str,
        min: i64,
        actual: i64,
    },

    #[error("{field} is required for {operation}")]
    RequiredFor {
        field: &'static str,
        operation: &'static str,
    },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for cq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
