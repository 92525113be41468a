// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the chorequest CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'cq init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("profile not found: {0}\n  hint: run 'cq profiles' to list profiles")]
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

    #[error("Not enough points: need {needed}, have {available}")]
    InsufficientPoints { needed: i64, available: i64 },

    #[error("{0}")]
    InvalidInput(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{field} is required for {operation}")]
    RequiredFor {
        field: &'static str,
        operation: &'static str,
    },

    #[error("parent PIN required\n  hint: pass --pin or set CQ_PIN")]
    PinRequired,

    #[error("incorrect parent PIN")]
    IncorrectPin,

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("corrupted data in database: {0}")]
    CorruptedData(String),

    #[error("some operations failed: {succeeded} succeeded, {failed} failed")]
    PartialBulkFailure { succeeded: usize, failed: usize },
}

/// A specialized Result type for chorequest operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<cq_core::Error> for Error {
    fn from(e: cq_core::Error) -> Self {
        match e {
            cq_core::Error::ProfileNotFound(name) => Error::ProfileNotFound(name),
            cq_core::Error::ChoreNotFound(id) => Error::ChoreNotFound(id),
            cq_core::Error::RewardNotFound(id) => Error::RewardNotFound(id),
            cq_core::Error::InvalidTransition {
                from,
                to,
                valid_targets,
            } => Error::InvalidTransition {
                from,
                to,
                valid_targets,
            },
            cq_core::Error::InsufficientPoints { needed, available } => {
                Error::InsufficientPoints { needed, available }
            }
            e @ (cq_core::Error::InvalidRecurrence(_)
            | cq_core::Error::InvalidDay(_)
            | cq_core::Error::InvalidDate(_)
            | cq_core::Error::ValueTooSmall { .. }) => Error::InvalidInput(e.to_string()),
            cq_core::Error::FieldEmpty { field } => Error::FieldEmpty { field },
            cq_core::Error::RequiredFor { field, operation } => {
                Error::RequiredFor { field, operation }
            }
            cq_core::Error::Database(e) => Error::Database(e),
            cq_core::Error::Io(e) => Error::Io(e),
            cq_core::Error::CorruptedData(s) => Error::CorruptedData(s),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
