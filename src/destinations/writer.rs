//! Destination over any `io::Write`

use crate::core::{Destination, LoggerError, Result, Sink};
use std::io::Write;

pub struct WriterDestination<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> WriterDestination<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Destination for WriterDestination<W> {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.writer
            .write_all(line)
            .map_err(|e| LoggerError::io_operation("writing log line", "writer", e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}

impl Sink {
    /// Sink over an arbitrary writer
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Sink::new(WriterDestination::new(writer))
    }
}
