//! Destination implementations

pub mod console;
pub mod file;
pub mod memory;
pub mod writer;

pub use console::{ConsoleDestination, Stream};
pub use file::FileDestination;
pub use memory::{MemoryBuffer, MemoryDestination};
pub use writer::WriterDestination;

pub use crate::core::{Destination, Sink};
