//! Identifier and validated scalar types for the board domain.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential, 1-based task identifier.
///
/// Identifiers double as storage positions: task `n` lives at index `n - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(usize);

impl TaskId {
    /// Creates a task identifier from its numeric value.
    #[must_use]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Returns the storage index, or `None` for the invalid identifier `0`.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Estimated task effort in clock units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDuration(u64);

impl TaskDuration {
    /// Creates a duration from a numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parses a duration token.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidDuration`] when the token is empty
    /// or not a non-negative decimal integer.
    pub fn parse(token: &str) -> Result<Self, BoardDomainError> {
        parse_unsigned(token)
            .map(Self)
            .ok_or(BoardDomainError::InvalidDuration)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a plain run of ASCII digits.
///
/// Signs, whitespace and values beyond `u64::MAX` are rejected.
pub(crate) fn parse_unsigned(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
