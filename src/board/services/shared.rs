//! Thread-safe handle serialising commands against one store.

use crate::{
    board::services::Store,
    command::{Command, CommandProcessor, Execution},
};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors raised while acquiring the shared store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SharedBoardError {
    /// A previous holder panicked while the lock was held.
    #[error("board lock poisoned: {0}")]
    Poisoned(String),
}

/// Cloneable handle to a store guarded by a single exclusive lock.
///
/// The lock is held for exactly one command, so concurrent callers observe
/// the same one-command-at-a-time behaviour as the sequential loop.
#[derive(Debug, Clone, Default)]
pub struct SharedBoard {
    store: Arc<Mutex<Store>>,
}

impl SharedBoard {
    /// Wraps `store` for shared use.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes one command while holding the store lock.
    ///
    /// # Errors
    ///
    /// Returns [`SharedBoardError::Poisoned`] when the lock is poisoned.
    pub fn execute(&self, command: Command) -> Result<Execution, SharedBoardError> {
        let mut store = self
            .store
            .lock()
            .map_err(|err| SharedBoardError::Poisoned(err.to_string()))?;
        Ok(CommandProcessor::new().execute(&mut *store, command))
    }

    /// Runs a read-only query against the store while holding the lock.
    ///
    /// # Errors
    ///
    /// Returns [`SharedBoardError::Poisoned`] when the lock is poisoned.
    pub fn inspect<T>(&self, query: impl FnOnce(&Store) -> T) -> Result<T, SharedBoardError> {
        let store = self
            .store
            .lock()
            .map_err(|err| SharedBoardError::Poisoned(err.to_string()))?;
        Ok(query(&*store))
    }
}
