//! Error types for board domain validation.

use serde::Serialize;
use thiserror::Error;

/// Coarse classification shared by every board failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A numeric or text argument is malformed, missing, or out of bounds.
    Validation,
    /// A name or description is already taken.
    Conflict,
    /// A task, user, or activity does not exist.
    NotFound,
    /// A bounded collection is full.
    Capacity,
}

/// Errors returned while constructing board domain values.
///
/// The display strings are the exact lines reported to the operator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task duration is missing or not a non-negative integer.
    #[error("invalid duration")]
    InvalidDuration,

    /// The task description is empty or exceeds the length bound.
    #[error("invalid description")]
    InvalidDescription,

    /// The activity name is empty, too long, or not uppercase letters and
    /// spaces.
    #[error("invalid description")]
    InvalidActivityName(String),

    /// The user name is empty or exceeds the length bound.
    #[error("invalid user name")]
    InvalidUserName(String),

    /// The clock delta is not a non-negative integer, or would overflow.
    #[error("invalid time")]
    InvalidTime,

    /// The move targets the initial activity.
    #[error("task already started")]
    TaskAlreadyStarted,
}

impl BoardDomainError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}
