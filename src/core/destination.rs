//! Destination trait for log output streams, and the shared sink handle

use super::error::Result;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// A byte sink that accepts whole, already-formatted lines.
///
/// Implementations write `line` with a single call so that lines from
/// different slots sharing one destination never interleave.
pub trait Destination: Send {
    fn write_line(&mut self, line: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// Shared handle to a [`Destination`].
///
/// Cloning is cheap; every slot of a logger holds a clone of the same sink.
#[derive(Clone)]
pub struct Sink {
    inner: Arc<Mutex<Box<dyn Destination>>>,
}

impl Sink {
    pub fn new<D: Destination + 'static>(destination: D) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(destination))),
        }
    }

    pub fn write_line(&self, line: &[u8]) -> Result<()> {
        self.inner.lock().write_line(line)
    }

    pub fn flush(&self) -> Result<()> {
        self.inner.lock().flush()
    }

    pub fn name(&self) -> String {
        self.inner.lock().name().to_string()
    }

    /// True if both handles point at the same destination
    pub fn same_destination(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("name", &self.name()).finish()
    }
}
