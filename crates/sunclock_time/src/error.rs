//! Error types for calendar field validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar/clock field validation.
///
/// The host hands over raw `tm`-style fields; anything outside the
/// documented range is rejected here instead of flowing into the formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day outside 1..=days-in-month.
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23.
    InvalidHour(u32),
    /// Minute outside 0..=59.
    InvalidMinute(u32),
    /// Second outside 0..=60 (60 allowed for a leap second).
    InvalidSecond(u32),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "month {m} outside 1..=12"),
            Self::InvalidDay { year, month, day } => {
                write!(f, "day {day} does not exist in {year:04}-{month:02}")
            }
            Self::InvalidHour(h) => write!(f, "hour {h} outside 0..=23"),
            Self::InvalidMinute(m) => write!(f, "minute {m} outside 0..=59"),
            Self::InvalidSecond(s) => write!(f, "second {s} outside 0..=60"),
        }
    }
}

impl Error for TimeError {}
