//! In-memory destination for capturing output

use crate::core::{Destination, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared byte buffer read back by the owner of a [`MemoryDestination`]
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

pub struct MemoryDestination {
    buffer: MemoryBuffer,
}

impl MemoryDestination {
    pub fn new(buffer: MemoryBuffer) -> Self {
        Self { buffer }
    }
}

impl Destination for MemoryDestination {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.buffer.bytes.lock().extend_from_slice(line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

impl Sink {
    /// Sink capturing into a fresh buffer, returned alongside it
    pub fn memory() -> (Self, MemoryBuffer) {
        let buffer = MemoryBuffer::new();
        (Sink::new(MemoryDestination::new(buffer.clone())), buffer)
    }
}
