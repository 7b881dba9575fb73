//! File destination implementation

use crate::core::{Destination, LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileDestination {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileDestination {
    /// Open `path` for appending, creating it if needed
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Destination for FileDestination {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.writer.write_all(line).map_err(|e| {
            LoggerError::io_operation("writing log line", self.path.display().to_string(), e)
        })
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileDestination {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}

impl Sink {
    /// Sink appending to the file at `path`
    pub fn file(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Sink::new(FileDestination::new(path)?))
    }
}
