//! Logging macros for ergonomic message formatting.
//!
//! These wrap [`LeveledLogger::emit_args`](crate::LeveledLogger::emit_args)
//! and the fatal path with `format!`-style arguments. The arguments are only
//! rendered when the addressed slot's gate is open.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::emit;
//!
//! let (sink, buffer) = Sink::memory();
//! let logger = LeveledLogger::new(sink);
//!
//! let port = 8080;
//! emit!(logger, 0, "listening on port {}", port).unwrap();
//! emit!(logger, 3, "not shown at the default threshold").unwrap();
//!
//! assert_eq!(buffer.contents(), "listening on port 8080\n");
//! ```

/// Emit a formatted message through slot `n` of a logger.
///
/// Evaluates to the `Result` of the emission.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let mut logger = LeveledLogger::new(Sink::memory().0);
/// # logger.set_threshold(3);
/// use leveled_logger::emit;
/// emit!(logger, 2, "Cache hit ratio: {:.2}", 0.9731).unwrap();
/// ```
#[macro_export]
macro_rules! emit {
    ($logger:expr, $n:expr, $($arg:tt)+) => {
        $logger.emit_args($n, format_args!($($arg)+))
    };
}

/// Emit values separated by single spaces through slot `n` of a logger.
///
/// The line-form counterpart of [`emit!`]: each argument only needs to
/// implement `Display`. Evaluates to the `Result` of the emission.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// let (sink, buffer) = Sink::memory();
/// let logger = LeveledLogger::new(sink);
/// use leveled_logger::emitln;
/// emitln!(logger, 0, "retries", 3, "of", 5).unwrap();
/// assert_eq!(buffer.contents(), "retries 3 of 5\n");
/// ```
#[macro_export]
macro_rules! emitln {
    ($logger:expr, $n:expr, $($value:expr),+ $(,)?) => {
        $logger.emit_line($n, &[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Write a formatted message to standard error and exit the process.
///
/// # Examples
///
/// ```no_run
/// use leveled_logger::fatal;
/// let path = "/etc/app.conf";
/// fatal!("cannot read {}", path);
/// ```
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::core::fatal::fatal_args(format_args!($($arg)+))
    };
}
