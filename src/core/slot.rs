//! Per-level writer
//!
//! A [`Slot`] pairs a destination with its own prefix and [`Flags`]. Every
//! line it writes is laid out as
//!
//! ```text
//! <prefix><date ><time[.micros] ><file:line: ><message>\n
//! ```
//!
//! where each decoration appears only when its flag is set.

use super::{destination::Sink, error::Result, flags::Flags};
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Write as _};
use std::panic::Location;

/// Marker written in place of a placeholder that has no value
pub const MISSING_VALUE: &str = "%!(MISSING)";

/// Prefix and flags of one slot, detached from its destination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    pub prefix: String,
    pub flags: Flags,
}

#[derive(Debug)]
pub struct Slot {
    sink: Sink,
    prefix: String,
    flags: Flags,
}

impl Slot {
    /// Bind a slot to `sink` with an empty prefix and no decoration
    pub fn new(sink: Sink) -> Self {
        Self {
            sink,
            prefix: String::new(),
            flags: Flags::NONE,
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    pub fn config(&self) -> SlotConfig {
        SlotConfig {
            prefix: self.prefix.clone(),
            flags: self.flags,
        }
    }

    pub fn apply(&mut self, config: SlotConfig) {
        self.prefix = config.prefix;
        self.flags = config.flags;
    }

    /// Write the values back to back, with no separator
    #[track_caller]
    pub fn print(&self, values: &[&dyn Display]) -> Result<()> {
        let location = Location::caller();
        self.output(location, &concat(values, ""))
    }

    /// Write the values separated by single spaces
    #[track_caller]
    pub fn println(&self, values: &[&dyn Display]) -> Result<()> {
        let location = Location::caller();
        self.output(location, &concat(values, " "))
    }

    /// Substitute `values` into the `{}` placeholders of `format` and write it.
    ///
    /// With no values the format string is written verbatim.
    #[track_caller]
    pub fn printf(&self, format: &str, values: &[&dyn Display]) -> Result<()> {
        let location = Location::caller();
        self.output(location, &substitute(format, values))
    }

    /// Write pre-built format arguments, as produced by `format_args!`
    #[track_caller]
    pub fn print_args(&self, args: fmt::Arguments<'_>) -> Result<()> {
        let location = Location::caller();
        self.output(location, &fmt::format(args))
    }

    fn output(&self, location: &Location<'_>, message: &str) -> Result<()> {
        let now = Local::now();
        let line = self.format_line(&now, location.file(), location.line(), message);
        self.sink.write_line(line.as_bytes())
    }

    pub(crate) fn format_line<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        file: &str,
        line: u32,
        message: &str,
    ) -> String
    where
        Tz::Offset: Display,
    {
        let mut out = String::with_capacity(self.prefix.len() + message.len() + 48);
        out.push_str(&self.prefix);

        if self.flags.has_timestamp() {
            if self.flags.contains(Flags::DATE) {
                let _ = write!(out, "{} ", now.format("%Y/%m/%d"));
            }
            if self.flags.has_time() {
                if self.flags.contains(Flags::MICROSECONDS) {
                    let _ = write!(out, "{} ", now.format("%H:%M:%S%.6f"));
                } else {
                    let _ = write!(out, "{} ", now.format("%H:%M:%S"));
                }
            }
        }

        if self.flags.has_location() {
            let file = if self.flags.contains(Flags::SHORT_FILE) {
                file.rsplit(['/', '\\']).next().unwrap_or(file)
            } else {
                file
            };
            let _ = write!(out, "{}:{}: ", file, line);
        }

        out.push_str(message);
        if !message.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

pub(crate) fn concat(values: &[&dyn Display], separator: &str) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        let _ = write!(out, "{}", value);
    }
    out
}

/// Runtime `{}` substitution.
///
/// `{{` and `}}` are brace escapes. Placeholders past the last value render
/// [`MISSING_VALUE`]; values past the last placeholder are appended as
/// `%!(EXTRA a, b)`.
pub(crate) fn substitute(format: &str, values: &[&dyn Display]) -> String {
    if values.is_empty() {
        return format.to_string();
    }

    let mut out = String::with_capacity(format.len() + values.len() * 8);
    let mut remaining = values.iter();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some('{')) => {
                chars.next();
                out.push('{');
            }
            ('{', Some('}')) => {
                chars.next();
                match remaining.next() {
                    Some(value) => {
                        let _ = write!(out, "{}", value);
                    }
                    None => out.push_str(MISSING_VALUE),
                }
            }
            ('}', Some('}')) => {
                chars.next();
                out.push('}');
            }
            _ => out.push(c),
        }
    }

    let extra: Vec<String> = remaining.map(|v| v.to_string()).collect();
    if !extra.is_empty() {
        let _ = write!(out, "%!(EXTRA {})", extra.join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    fn slot(flags: Flags) -> Slot {
        let (sink, _) = Sink::memory();
        Slot::new(sink).with_flags(flags)
    }

    #[test]
    fn test_no_flags_is_bare_message() {
        let line = slot(Flags::NONE).format_line(&fixed_datetime(), "src/a.rs", 7, "hello");
        assert_eq!(line, "hello\n");
    }

    #[test]
    fn test_trailing_newline_not_doubled() {
        let line = slot(Flags::NONE).format_line(&fixed_datetime(), "src/a.rs", 7, "hello\n");
        assert_eq!(line, "hello\n");
    }

    #[test]
    fn test_std_flags() {
        let line = slot(Flags::STD).format_line(&fixed_datetime(), "src/a.rs", 7, "msg");
        assert_eq!(line, "2025/01/08 10:30:45 msg\n");
    }

    #[test]
    fn test_microseconds_implies_time() {
        let line =
            slot(Flags::MICROSECONDS).format_line(&fixed_datetime(), "src/a.rs", 7, "msg");
        assert_eq!(line, "10:30:45.123456 msg\n");
    }

    #[test]
    fn test_date_only() {
        let line = slot(Flags::DATE).format_line(&fixed_datetime(), "src/a.rs", 7, "msg");
        assert_eq!(line, "2025/01/08 msg\n");
    }

    #[test]
    fn test_long_and_short_file() {
        let now = fixed_datetime();
        let long = slot(Flags::LONG_FILE).format_line(&now, "src/core/a.rs", 42, "msg");
        assert_eq!(long, "src/core/a.rs:42: msg\n");

        let both = slot(Flags::LONG_FILE | Flags::SHORT_FILE)
            .format_line(&now, "src/core/a.rs", 42, "msg");
        assert_eq!(both, "a.rs:42: msg\n");
    }

    #[test]
    fn test_prefix_comes_first() {
        let s = slot(Flags::DATE | Flags::SHORT_FILE).with_prefix("[app] ");
        let line = s.format_line(&fixed_datetime(), "x/y.rs", 1, "msg");
        assert_eq!(line, "[app] 2025/01/08 y.rs:1: msg\n");
    }

    #[test]
    fn test_substitute_without_values_is_literal() {
        assert_eq!(substitute("100% {} {{x}}", &[]), "100% {} {{x}}");
    }

    #[test]
    fn test_substitute_values() {
        assert_eq!(substitute("{} + {} = {}", &[&1, &2, &3]), "1 + 2 = 3");
        assert_eq!(substitute("{{{}}}", &[&"x"]), "{x}");
        assert_eq!(substitute("{} and {}", &[&"a"]), "a and %!(MISSING)");
        assert_eq!(substitute("only {}", &[&1, &2, &"z"]), "only 1%!(EXTRA 2, z)");
    }

    #[test]
    fn test_print_variants_reach_sink() {
        let (sink, buffer) = Sink::memory();
        let s = Slot::new(sink);

        s.print(&[&"a", &1, &"b"]).unwrap();
        s.println(&[&"a", &1, &"b"]).unwrap();
        s.printf("n={}", &[&5]).unwrap();
        s.print_args(format_args!("{:>3}", 7)).unwrap();

        assert_eq!(buffer.lines(), vec!["a1b", "a 1 b", "n=5", "  7"]);
    }

    #[test]
    fn test_location_is_callers() {
        let (sink, buffer) = Sink::memory();
        let s = Slot::new(sink).with_flags(Flags::SHORT_FILE);

        let line = line!() + 1;
        s.print(&[&"here"]).unwrap();

        assert_eq!(buffer.contents(), format!("slot.rs:{}: here\n", line));
    }

    #[test]
    fn test_config_apply() {
        let mut s = slot(Flags::NONE);
        s.apply(SlotConfig {
            prefix: "p:".into(),
            flags: Flags::TIME,
        });
        assert_eq!(s.prefix(), "p:");
        assert_eq!(s.flags(), Flags::TIME);
        assert_eq!(s.config().prefix, "p:");
    }
}
