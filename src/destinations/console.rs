//! Console destination implementation

use crate::core::{Destination, LoggerError, Result, Sink};
use std::io::{self, Write};

/// Which standard stream a [`ConsoleDestination`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }
}

pub struct ConsoleDestination {
    stream: Stream,
}

impl ConsoleDestination {
    pub fn new(stream: Stream) -> Self {
        Self { stream }
    }

    pub fn stdout() -> Self {
        Self::new(Stream::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(Stream::Stderr)
    }

    pub fn stream(&self) -> Stream {
        self.stream
    }
}

impl Destination for ConsoleDestination {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        let result = match self.stream {
            Stream::Stdout => io::stdout().lock().write_all(line),
            Stream::Stderr => io::stderr().lock().write_all(line),
        };
        result.map_err(|e| {
            LoggerError::io_operation("writing log line", self.stream.as_str(), e)
        })
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        self.stream.as_str()
    }
}

impl Sink {
    /// Sink bound to standard output
    pub fn stdout() -> Self {
        Sink::new(ConsoleDestination::stdout())
    }

    /// Sink bound to standard error
    pub fn stderr() -> Self {
        Sink::new(ConsoleDestination::stderr())
    }
}
