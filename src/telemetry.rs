//! Tracing subscriber bootstrap for binaries.
//!
//! Events go to stderr so that stdout carries nothing but replies.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Error raised when the global subscriber cannot be installed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to initialise tracing: {0}")]
pub struct TelemetryError(String);

/// Installs a formatted stderr subscriber.
///
/// `RUST_LOG` takes precedence over `default_level` when set.
///
/// # Errors
///
/// Returns [`TelemetryError`] when a global subscriber is already installed
/// or the filter directive is invalid.
pub fn init_tracing(default_level: &str) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|err| TelemetryError(err.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| TelemetryError(err.to_string()))
}
