//! Core logger types and traits

pub mod context;
pub mod destination;
pub mod error;
pub mod fatal;
pub mod flags;
pub mod leveled_logger;
pub mod slot;

pub use context::{GlobalContext, LoggerContext};
pub use destination::{Destination, Sink};
pub use error::{LoggerError, Result};
pub use fatal::{fatal, fatal_to, FATAL_EXIT_CODE};
pub use flags::Flags;
pub use leveled_logger::{
    LeveledLogger, LeveledLoggerBuilder, Level, DEFAULT_THRESHOLD, SLOT_COUNT,
};
pub use slot::{Slot, SlotConfig};
