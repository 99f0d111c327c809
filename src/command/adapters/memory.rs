//! In-memory line source and sink for embedding and tests.

use crate::command::{
    Reply,
    ports::{LineSource, OutputSink, SessionResult},
};
use std::collections::VecDeque;

/// Replays a fixed script of command lines.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    /// Creates a source yielding `lines` in order.
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedLines {
    fn next_line(&mut self) -> SessionResult<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Collects every emitted reply.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    replies: Vec<Reply>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the replies emitted so far.
    #[must_use]
    pub fn replies(&self) -> &[Reply] {
        &self.replies
    }

    /// Returns the emitted replies rendered as text lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.replies.iter().map(ToString::to_string).collect()
    }
}

impl OutputSink for RecordingSink {
    fn emit(&mut self, reply: &Reply) -> SessionResult<()> {
        self.replies.push(reply.clone());
        Ok(())
    }
}
