//! Adapters over standard readers and writers.

use crate::command::{
    Reply,
    ports::{LineSource, OutputSink, SessionError, SessionResult},
};
use std::io::{BufRead, Write};

/// Reads command lines from any buffered reader.
#[derive(Debug)]
pub struct ReaderLineSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderLineSource<R> {
    /// Wraps `reader`.
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLineSource<R> {
    fn next_line(&mut self) -> SessionResult<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(SessionError::Read)?;
        Ok((read > 0).then_some(line))
    }
}

/// Writes each reply as its plain text line.
#[derive(Debug)]
pub struct TextSink<W> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    /// Wraps `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for TextSink<W> {
    fn emit(&mut self, reply: &Reply) -> SessionResult<()> {
        writeln!(self.writer, "{reply}").map_err(SessionError::Write)?;
        self.writer.flush().map_err(SessionError::Write)
    }
}

/// Writes each reply as one JSON object per line.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wraps `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for JsonLinesSink<W> {
    fn emit(&mut self, reply: &Reply) -> SessionResult<()> {
        serde_json::to_writer(&mut self.writer, reply)?;
        writeln!(self.writer).map_err(SessionError::Write)?;
        self.writer.flush().map_err(SessionError::Write)
    }
}
