//! Fatal path
//!
//! Not leveled: a fatal call always writes, then ends the process with
//! [`FATAL_EXIT_CODE`]. Intended for startup and configuration failures the
//! caller has already judged unrecoverable.

use super::{destination::Sink, flags::Flags, slot::{concat, Slot}};
use std::fmt::{self, Display};
use std::process;

/// Exit status of a process ended by the fatal path
pub const FATAL_EXIT_CODE: i32 = 1;

/// The text a fatal call writes for `values`, before decoration
pub fn fatal_message(values: &[&dyn Display]) -> String {
    concat(values, "")
}

/// Write `values` to standard error and exit
#[track_caller]
pub fn fatal(values: &[&dyn Display]) -> ! {
    fatal_to(&Sink::stderr(), values)
}

/// Write `values` to `sink` with date and time decoration, then exit.
///
/// Write and flush failures are ignored; the process exits regardless.
#[track_caller]
pub fn fatal_to(sink: &Sink, values: &[&dyn Display]) -> ! {
    let slot = Slot::new(sink.clone()).with_flags(Flags::STD);
    let _ = slot.print(&[&fatal_message(values)]);
    terminate(sink)
}

/// Write `format_args!` output to standard error and exit
#[track_caller]
pub fn fatal_args(args: fmt::Arguments<'_>) -> ! {
    let sink = Sink::stderr();
    let slot = Slot::new(sink.clone()).with_flags(Flags::STD);
    let _ = slot.print_args(args);
    terminate(&sink)
}

fn terminate(sink: &Sink) -> ! {
    let _ = sink.flush();
    process::exit(FATAL_EXIT_CODE)
}
