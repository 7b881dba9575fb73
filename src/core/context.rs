//! Process-scope pair of loggers
//!
//! A [`LoggerContext`] holds the primary-stream logger (`out`) and the
//! error-stream logger (`err`). Code that can take the context as a value
//! should; tests in particular build isolated contexts over memory sinks.
//!
//! For code that needs process-wide access there is a single global slot:
//!
//! 1. Optionally call [`install`] once, early in `main`, with a configured
//!    context. A second call fails with [`LoggerError::AlreadyInitialized`].
//! 2. Use [`global`] (or [`with_out`] / [`with_err`]) anywhere afterwards. If
//!    nothing was installed, the first access installs [`LoggerContext::stdio`].
//!
//! The global context lives for the rest of the process and is never torn
//! down. Each of the two loggers sits behind its own mutex, which is the
//! synchronization needed to reconfigure a logger other threads may be
//! writing through.

use super::{
    error::{LoggerError, Result},
    leveled_logger::LeveledLogger,
};
use parking_lot::{Mutex, MutexGuard};
use std::sync::OnceLock;

#[derive(Debug)]
pub struct LoggerContext {
    pub out: LeveledLogger,
    pub err: LeveledLogger,
}

impl LoggerContext {
    pub fn new(out: LeveledLogger, err: LeveledLogger) -> Self {
        Self { out, err }
    }

    /// `out` bound to standard output, `err` bound to standard error
    pub fn stdio() -> Self {
        Self::new(LeveledLogger::stdout(), LeveledLogger::stderr())
    }

    pub fn flush(&self) -> Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

impl Default for LoggerContext {
    fn default() -> Self {
        Self::stdio()
    }
}

/// Process-wide pair of loggers, each behind its own lock.
///
/// The two loggers are independent, so holding one never blocks the other:
/// `with_out` may call `with_err` and the reverse. Locking the same logger
/// twice from one thread still deadlocks.
#[derive(Debug)]
pub struct GlobalContext {
    out: Mutex<LeveledLogger>,
    err: Mutex<LeveledLogger>,
}

impl GlobalContext {
    fn from_context(context: LoggerContext) -> Self {
        let LoggerContext { out, err } = context;
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    /// Lock the primary-stream logger
    pub fn out(&self) -> MutexGuard<'_, LeveledLogger> {
        self.out.lock()
    }

    /// Lock the error-stream logger
    pub fn err(&self) -> MutexGuard<'_, LeveledLogger> {
        self.err.lock()
    }

    pub fn flush(&self) -> Result<()> {
        self.out().flush()?;
        self.err().flush()
    }
}

static GLOBAL: OnceLock<GlobalContext> = OnceLock::new();

/// Install `context` as the process-wide context
pub fn install(context: LoggerContext) -> Result<()> {
    let mut pending = Some(context);
    GLOBAL.get_or_init(|| GlobalContext::from_context(pending.take().unwrap_or_default()));
    match pending {
        None => Ok(()),
        Some(_) => Err(LoggerError::AlreadyInitialized),
    }
}

/// The process-wide context, installing the stdio default on first use
pub fn global() -> &'static GlobalContext {
    GLOBAL.get_or_init(|| GlobalContext::from_context(LoggerContext::stdio()))
}

/// True once a context has been installed, explicitly or by first use
pub fn is_installed() -> bool {
    GLOBAL.get().is_some()
}

/// Run `f` with the global primary-stream logger
pub fn with_out<R>(f: impl FnOnce(&mut LeveledLogger) -> R) -> R {
    f(&mut *global().out())
}

/// Run `f` with the global error-stream logger
pub fn with_err<R>(f: impl FnOnce(&mut LeveledLogger) -> R) -> R {
    f(&mut *global().err())
}
