//! Validated name and description types.

use super::BoardDomainError;
use serde::Serialize;
use std::fmt;

/// Returns `true` when `value` is non-empty and at most `max_len` characters.
fn within_bounds(value: &str, max_len: usize) -> bool {
    !value.is_empty() && value.chars().count() <= max_len
}

/// Registered user name.
///
/// Names are stored verbatim; inner whitespace is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Creates a validated user name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidUserName`] when the value is empty
    /// or longer than `max_len` characters.
    pub fn new(value: impl Into<String>, max_len: usize) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        if !within_bounds(&raw, max_len) {
            return Err(BoardDomainError::InvalidUserName(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Workflow stage name made of uppercase ASCII letters and spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ActivityName(String);

impl ActivityName {
    /// Initial stage of every task. Never a valid move target.
    pub const TO_DO: &'static str = "TO DO";
    /// Built-in working stage.
    pub const IN_PROGRESS: &'static str = "IN PROGRESS";
    /// Terminal stage; entering it produces a completion report.
    pub const DONE: &'static str = "DONE";

    /// Creates a validated activity name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidActivityName`] when the value is
    /// empty, longer than `max_len` characters, or contains anything other
    /// than `A`-`Z` and spaces.
    pub fn new(value: impl Into<String>, max_len: usize) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let is_valid = within_bounds(&raw, max_len)
            && raw
                .chars()
                .all(|character| character.is_ascii_uppercase() || character == ' ');
        if !is_valid {
            return Err(BoardDomainError::InvalidActivityName(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the three built-in stages in seeding order.
    #[must_use]
    pub fn built_ins() -> [Self; 3] {
        [Self::TO_DO, Self::IN_PROGRESS, Self::DONE].map(|name| Self(name.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the initial `TO DO` stage.
    #[must_use]
    pub fn is_to_do(&self) -> bool {
        self.0 == Self::TO_DO
    }

    /// Returns `true` for the terminal `DONE` stage.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.0 == Self::DONE
    }
}

impl AsRef<str> for ActivityName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task description, unique across the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidDescription`] when the value is
    /// empty or longer than `max_len` characters.
    pub fn new(value: impl Into<String>, max_len: usize) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        if !within_bounds(&raw, max_len) {
            return Err(BoardDomainError::InvalidDescription);
        }
        Ok(Self(raw))
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
