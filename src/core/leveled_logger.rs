//! Level-gated logger over a fixed array of per-level writers

use super::{
    destination::Sink,
    error::{LoggerError, Result},
    flags::Flags,
    slot::{Slot, SlotConfig},
};
use std::fmt::{self, Display};

/// Number of slots in every logger
pub const SLOT_COUNT: usize = 10;

/// Threshold a freshly built logger starts with: only slot 0 is open
pub const DEFAULT_THRESHOLD: Level = 1;

/// Slot index supplied at each call. Smaller means higher priority.
pub type Level = i32;

/// A logger holding [`SLOT_COUNT`] independently configured slots, all bound
/// to one destination, and a threshold.
///
/// A call addressed to slot `n` is written iff `n < threshold`. With the
/// default threshold of 1 only slot 0 is open; raising the threshold to
/// `k + 1` opens slots `0..=k`, and a threshold of 0 or below silences all.
///
/// Emission takes `&self` and is safe to call from several threads; the
/// destination serializes whole lines. Reconfiguration takes `&mut self`, so a
/// logger that is shared and reconfigured after startup needs an outer lock
/// (see [`crate::core::context`]).
///
/// # Example
///
/// ```
/// use leveled_logger::{LeveledLogger, Sink};
///
/// let (sink, buffer) = Sink::memory();
/// let mut logger = LeveledLogger::new(sink);
///
/// logger.emit(0, &[&"hello"]).unwrap();
/// logger.emit(1, &[&"world"]).unwrap();
/// assert_eq!(buffer.contents(), "hello\n");
///
/// logger.set_threshold(2);
/// logger.emit(1, &[&"world"]).unwrap();
/// assert_eq!(buffer.contents(), "hello\nworld\n");
/// ```
#[derive(Debug)]
pub struct LeveledLogger {
    slots: [Slot; SLOT_COUNT],
    threshold: Level,
}

impl LeveledLogger {
    /// Bind every slot to `sink` with an empty prefix and no flags
    #[must_use]
    pub fn new(sink: Sink) -> Self {
        Self {
            slots: std::array::from_fn(|_| Slot::new(sink.clone())),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Logger bound to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Sink::stdout())
    }

    /// Logger bound to standard error
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Sink::stderr())
    }

    /// Create a builder for LeveledLogger
    #[must_use]
    pub fn builder() -> LeveledLoggerBuilder {
        LeveledLoggerBuilder::new()
    }

    fn index(n: Level) -> Result<usize> {
        usize::try_from(n)
            .ok()
            .filter(|&i| i < SLOT_COUNT)
            .ok_or_else(|| LoggerError::slot_out_of_range(n, SLOT_COUNT))
    }

    /// Resolve `n` to its slot if the gate is open for it
    fn gate(&self, n: Level) -> Result<Option<&Slot>> {
        let index = Self::index(n)?;
        if n < self.threshold {
            Ok(Some(&self.slots[index]))
        } else {
            Ok(None)
        }
    }

    /// Whether a call at level `n` would currently be written
    pub fn enabled(&self, n: Level) -> bool {
        Self::index(n).is_ok() && n < self.threshold
    }

    /// Write `values` back to back through slot `n` if the gate is open.
    ///
    /// No separator is inserted, not even between two numbers:
    /// `emit(0, &[&1, &2])` writes `12`. Use [`emit_line`](Self::emit_line)
    /// for space-separated values.
    #[track_caller]
    pub fn emit(&self, n: Level, values: &[&dyn Display]) -> Result<()> {
        match self.gate(n)? {
            Some(slot) => slot.print(values),
            None => Ok(()),
        }
    }

    /// Substitute `values` into `format` and write through slot `n` if the
    /// gate is open. With no values `format` is written literally.
    #[track_caller]
    pub fn emit_formatted(&self, n: Level, format: &str, values: &[&dyn Display]) -> Result<()> {
        match self.gate(n)? {
            Some(slot) => slot.printf(format, values),
            None => Ok(()),
        }
    }

    /// Write `values` separated by spaces through slot `n` if the gate is open
    #[track_caller]
    pub fn emit_line(&self, n: Level, values: &[&dyn Display]) -> Result<()> {
        match self.gate(n)? {
            Some(slot) => slot.println(values),
            None => Ok(()),
        }
    }

    /// Write `format_args!` output through slot `n` if the gate is open.
    ///
    /// The arguments are only rendered when the gate is open.
    #[track_caller]
    pub fn emit_args(&self, n: Level, args: fmt::Arguments<'_>) -> Result<()> {
        match self.gate(n)? {
            Some(slot) => slot.print_args(args),
            None => Ok(()),
        }
    }

    /// Set the threshold. Any value is accepted.
    pub fn set_threshold(&mut self, n: Level) {
        self.threshold = n;
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub fn set_flags(&mut self, n: Level, flags: Flags) -> Result<()> {
        self.slot_mut(n)?.set_flags(flags);
        Ok(())
    }

    pub fn flags(&self, n: Level) -> Result<Flags> {
        Ok(self.slot(n)?.flags())
    }

    pub fn set_prefix(&mut self, n: Level, prefix: impl Into<String>) -> Result<()> {
        self.slot_mut(n)?.set_prefix(prefix);
        Ok(())
    }

    pub fn prefix(&self, n: Level) -> Result<&str> {
        Ok(self.slot(n)?.prefix())
    }

    /// Apply `flags` to every slot
    pub fn set_all_flags(&mut self, flags: Flags) {
        for slot in &mut self.slots {
            slot.set_flags(flags);
        }
    }

    /// Apply `prefix` to every slot
    pub fn set_all_prefixes(&mut self, prefix: &str) {
        for slot in &mut self.slots {
            slot.set_prefix(prefix);
        }
    }

    pub fn slot(&self, n: Level) -> Result<&Slot> {
        Ok(&self.slots[Self::index(n)?])
    }

    fn slot_mut(&mut self, n: Level) -> Result<&mut Slot> {
        Ok(&mut self.slots[Self::index(n)?])
    }

    pub fn slot_config(&self, n: Level) -> Result<SlotConfig> {
        Ok(self.slot(n)?.config())
    }

    pub fn set_slot_config(&mut self, n: Level, config: SlotConfig) -> Result<()> {
        self.slot_mut(n)?.apply(config);
        Ok(())
    }

    /// The destination shared by all slots
    pub fn sink(&self) -> &Sink {
        self.slots[0].sink()
    }

    pub fn flush(&self) -> Result<()> {
        self.sink().flush()
    }
}

impl Drop for LeveledLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing LeveledLogger with a fluent API
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
///
/// let logger = LeveledLogger::builder()
///     .sink(Sink::stderr())
///     .threshold(3)
///     .all_flags(Flags::STD)
///     .prefix(2, "debug: ")
///     .build()
///     .unwrap();
///
/// assert_eq!(logger.threshold(), 3);
/// assert_eq!(logger.prefix(2).unwrap(), "debug: ");
/// ```
pub struct LeveledLoggerBuilder {
    sink: Option<Sink>,
    threshold: Level,
    all_flags: Option<Flags>,
    flags: Vec<(Level, Flags)>,
    prefixes: Vec<(Level, String)>,
}

impl LeveledLoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            sink: None,
            threshold: DEFAULT_THRESHOLD,
            all_flags: None,
            flags: Vec::new(),
            prefixes: Vec::new(),
        }
    }

    /// Set the destination. Defaults to standard output.
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Sink) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    /// Flags for every slot, applied before any per-slot flags
    #[must_use = "builder methods return a new value"]
    pub fn all_flags(mut self, flags: Flags) -> Self {
        self.all_flags = Some(flags);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, n: Level, flags: Flags) -> Self {
        self.flags.push((n, flags));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, n: Level, prefix: impl Into<String>) -> Self {
        self.prefixes.push((n, prefix.into()));
        self
    }

    /// Build the LeveledLogger, rejecting out-of-range slot indices
    pub fn build(self) -> Result<LeveledLogger> {
        let mut logger = LeveledLogger::new(self.sink.unwrap_or_else(Sink::stdout));
        logger.set_threshold(self.threshold);

        if let Some(flags) = self.all_flags {
            logger.set_all_flags(flags);
        }
        for (n, flags) in self.flags {
            logger.set_flags(n, flags)?;
        }
        for (n, prefix) in self.prefixes {
            logger.set_prefix(n, prefix)?;
        }

        Ok(logger)
    }
}

impl Default for LeveledLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
