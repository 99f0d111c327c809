//! Runs the task board over standard input and output.
//!
//! Usage:
//!
//! ```text
//! taskboard [--json]
//! ```
//!
//! Each input line is one command. Replies are written one per line, as
//! plain text by default or as JSON objects with `--json`. The process exits
//! with status 0 on `q` or at end of input. Diagnostics go to stderr and are
//! filtered by `RUST_LOG` (default `warn`).

use std::io;
use taskboard::{
    board::services::Store,
    command::{
        adapters::io::{JsonLinesSink, ReaderLineSource, TextSink},
        run_session,
    },
    telemetry::init_tracing,
};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    init_tracing("warn")?;

    let json = std::env::args().skip(1).any(|arg| arg == "--json");
    let mut store = Store::default();
    let mut source = ReaderLineSource::new(io::stdin().lock());

    if json {
        run_session(&mut store, &mut source, &mut JsonLinesSink::new(io::stdout().lock()))?;
    } else {
        run_session(&mut store, &mut source, &mut TextSink::new(io::stdout().lock()))?;
    }
    Ok(())
}
