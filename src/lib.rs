//! # Leveled Logger
//!
//! A minimal leveled logging facade. Each [`LeveledLogger`] owns ten
//! independently configured writers ("slots"), all bound to one destination,
//! and a threshold: a call addressed to slot `n` is written iff
//! `n < threshold`.
//!
//! ## Features
//!
//! - **Per-level writers**: every slot carries its own prefix and [`Flags`]
//! - **Two streams**: a [`LoggerContext`] pairs a primary-stream logger with an
//!   error-stream logger
//! - **Fatal path**: [`fatal`] writes unconditionally and exits
//! - **Fail fast**: out-of-range slot indices are reported, never wrapped

pub mod core;
pub mod destinations;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Destination, Flags, Level, LeveledLogger, LeveledLoggerBuilder, LoggerContext,
        LoggerError, Result, Sink, Slot, SlotConfig, DEFAULT_THRESHOLD, SLOT_COUNT,
    };
    pub use crate::destinations::{ConsoleDestination, FileDestination, MemoryBuffer, Stream};
}

pub use crate::core::{
    context, fatal, fatal_to, Destination, Flags, GlobalContext, Level, LeveledLogger,
    LeveledLoggerBuilder, LoggerContext, LoggerError, Result, Sink, Slot, SlotConfig,
    DEFAULT_THRESHOLD, FATAL_EXIT_CODE, SLOT_COUNT,
};
pub use destinations::{ConsoleDestination, FileDestination, MemoryBuffer, Stream};
