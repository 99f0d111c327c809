//! Bounded, append-only collections of users, activities and tasks.
//!
//! Each registry checks uniqueness and capacity before inserting, so a
//! rejected insert never changes the collection.

mod activities;
mod tasks;
mod users;

pub use activities::{Activity, ActivityRegistry};
pub use tasks::TaskRegistry;
pub use users::{User, UserRegistry};

use crate::board::domain::ErrorKind;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors returned by the bounded registries.
///
/// The display strings are the exact lines reported to the operator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A user with the same name is already registered.
    #[error("user already exists")]
    DuplicateUser(String),

    /// The user registry is full.
    #[error("too many users")]
    UserCapacity {
        /// Configured bound.
        limit: usize,
    },

    /// No user has the given name.
    #[error("no such user")]
    UserNotFound(String),

    /// An activity with the same name is already registered.
    #[error("duplicate activity")]
    DuplicateActivity(String),

    /// The activity registry is full.
    #[error("too many activities")]
    ActivityCapacity {
        /// Configured bound.
        limit: usize,
    },

    /// No activity has the given name.
    #[error("no such activity")]
    ActivityNotFound(String),

    /// A task with the same description already exists.
    #[error("duplicate description")]
    DuplicateDescription(String),

    /// The task registry is full.
    #[error("too many tasks")]
    TaskCapacity {
        /// Configured bound.
        limit: usize,
    },

    /// The token does not reference an existing task.
    #[error("no such task")]
    TaskNotFound(String),

    /// A token in an explicit listing does not reference an existing task.
    #[error("{0}: no such task")]
    UnknownTaskToken(String),
}

impl RegistryError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateUser(_) | Self::DuplicateActivity(_) | Self::DuplicateDescription(_) => {
                ErrorKind::Conflict
            }
            Self::UserCapacity { .. } | Self::ActivityCapacity { .. } | Self::TaskCapacity { .. } => {
                ErrorKind::Capacity
            }
            Self::UserNotFound(_)
            | Self::ActivityNotFound(_)
            | Self::TaskNotFound(_)
            | Self::UnknownTaskToken(_) => ErrorKind::NotFound,
        }
    }
}
