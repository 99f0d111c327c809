//! The read-dispatch-emit command loop.

use super::{
    Command, CommandProcessor, Flow,
    ports::{LineSource, OutputSink, SessionResult},
};
use crate::board::services::Store;
use tracing::debug;

/// Runs commands from `source` against `store` until `q` or end of input,
/// emitting every reply to `sink`.
///
/// Rejected commands never stop the loop; only I/O failures do.
///
/// # Errors
///
/// Returns [`super::ports::SessionError`] when reading a line or emitting a
/// reply fails.
pub fn run_session(
    store: &mut Store,
    source: &mut impl LineSource,
    sink: &mut impl OutputSink,
) -> SessionResult<()> {
    let processor = CommandProcessor::new();
    while let Some(line) = source.next_line()? {
        let Some(command) = Command::parse(&line) else {
            continue;
        };
        let execution = processor.execute(store, command);
        for reply in &execution.replies {
            sink.emit(reply)?;
        }
        if execution.flow == Flow::Quit {
            debug!("quit received");
            break;
        }
    }
    Ok(())
}
