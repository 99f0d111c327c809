//! Logical clock driving task start times and completion reports.

use super::{BoardDomainError, ids::parse_unsigned};
use serde::Serialize;

/// Non-negative amount by which the clock is advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeDelta(u64);

impl TimeDelta {
    /// Creates a delta from a numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parses a delta token.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTime`] unless the token is a plain
    /// non-negative decimal integer.
    pub fn parse(token: &str) -> Result<Self, BoardDomainError> {
        parse_unsigned(token)
            .map(Self)
            .ok_or(BoardDomainError::InvalidTime)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns `true` when the delta leaves the clock unchanged.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

/// Simulated time counter. Only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LogicalClock {
    now: u64,
}

impl LogicalClock {
    /// Creates a clock reading zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { now: 0 }
    }

    /// Returns the current reading.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.now
    }

    /// Advances the clock and returns the new reading.
    ///
    /// A zero delta is a query.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTime`] when the sum would overflow;
    /// the clock is left unchanged.
    pub const fn advance(&mut self, delta: TimeDelta) -> Result<u64, BoardDomainError> {
        match self.now.checked_add(delta.value()) {
            Some(now) => {
                self.now = now;
                Ok(now)
            }
            None => Err(BoardDomainError::InvalidTime),
        }
    }
}
