//! Formatting flag bits
//!
//! Bits are or'ed together to control the header written before each line.
//! The order of the decorations is fixed (the order listed here) and a
//! separating space or colon follows each one:
//!
//! ```text
//! 2009/01/23 01:23:23.123123 /a/b/c/d.rs:23: message
//! ```

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Serialized as the bare bit value; unknown bits are rejected on load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Flags(u32);

impl Flags {
    /// No decoration
    pub const NONE: Flags = Flags(0);
    /// The date in the local time zone: `2009/01/23`
    pub const DATE: Flags = Flags(1 << 0);
    /// The time in the local time zone: `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Assumes `TIME`.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full file name and line number: `/a/b/c/d.rs:23`
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final file name element and line number: `d.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Conventional decoration for a freshly configured writer
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    const ALL: u32 = 0b1_1111;

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build from raw bits, rejecting anything outside the known set
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Flags> {
        if bits & !Self::ALL == 0 {
            Some(Flags(bits))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Flags {
        Flags(bits & Self::ALL)
    }

    #[must_use]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub(crate) fn has_timestamp(self) -> bool {
        self.0 & (Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0) != 0
    }

    pub(crate) fn has_time(self) -> bool {
        self.0 & (Self::TIME.0 | Self::MICROSECONDS.0) != 0
    }

    pub(crate) fn has_location(self) -> bool {
        self.0 & (Self::LONG_FILE.0 | Self::SHORT_FILE.0) != 0
    }
}

impl TryFrom<u32> for Flags {
    type Error = LoggerError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Flags::from_bits(bits).ok_or_else(|| {
            LoggerError::config(
                "Flags",
                format!("unknown bits {:#x} in {:#x}", bits & !Self::ALL, bits),
            )
        })
    }
}

impl From<Flags> for u32 {
    fn from(flags: Flags) -> u32 {
        flags.0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Flags, &str); 5] = [
            (Flags::DATE, "DATE"),
            (Flags::TIME, "TIME"),
            (Flags::MICROSECONDS, "MICROSECONDS"),
            (Flags::LONG_FILE, "LONG_FILE"),
            (Flags::SHORT_FILE, "SHORT_FILE"),
        ];

        if self.is_empty() {
            return f.write_str("NONE");
        }
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
