//! Port contracts for the command loop's input and output collaborators.

use super::Reply;
use thiserror::Error;

/// Errors raised by line sources and output sinks.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading the next line failed.
    #[error("failed to read command: {0}")]
    Read(#[source] std::io::Error),

    /// Writing a reply failed.
    #[error("failed to write reply: {0}")]
    Write(#[source] std::io::Error),

    /// Encoding a reply as JSON failed.
    #[error("failed to encode reply: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for session I/O.
pub type SessionResult<T> = Result<T, SessionError>;

/// Supplies raw command lines, one per call.
pub trait LineSource {
    /// Returns the next line, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Read`] when the underlying reader fails.
    fn next_line(&mut self) -> SessionResult<Option<String>>;
}

/// Receives one reply per output line.
pub trait OutputSink {
    /// Emits a reply.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the reply cannot be written.
    fn emit(&mut self, reply: &Reply) -> SessionResult<()>;
}
