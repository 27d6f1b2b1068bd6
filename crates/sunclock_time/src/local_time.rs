//! Wall-clock calendar fields as delivered by the host time source.
//!
//! The host reports `tm`-style fields: years since 1900, a 0-based month
//! and a DST flag. [`LocalTime`] stores them in their natural form
//! (full year, 1-based month) after validating every field.

use crate::error::TimeError;
use crate::julian::{to_julian_day_number, validate_date};

/// Year offset used by the host's `tm_year` field.
pub const HOST_YEAR_BASE: i32 = 1900;

/// Local calendar date and clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub is_dst: bool,
}

impl LocalTime {
    /// Build a validated local time.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        is_dst: bool,
    ) -> Result<Self, TimeError> {
        validate_date(year, month, day)?;
        if hour > 23 {
            return Err(TimeError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(TimeError::InvalidMinute(minute));
        }
        if second > 60 {
            return Err(TimeError::InvalidSecond(second));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            is_dst,
        })
    }

    /// Build from host fields: `years_since_1900`, 0-based `month0`.
    pub fn from_host_fields(
        years_since_1900: i32,
        month0: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        is_dst: bool,
    ) -> Result<Self, TimeError> {
        Self::new(
            years_since_1900 + HOST_YEAR_BASE,
            month0 + 1,
            day,
            hour,
            minute,
            second,
            is_dst,
        )
    }

    /// Calendar date triple `(year, month, day)`.
    pub fn date(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }

    /// Julian Day Number of the calendar date.
    pub fn julian_day_number(&self) -> i64 {
        to_julian_day_number(self.year, self.month, self.day)
    }

    /// Whether this is the first second of an hour (`mm:00:00`).
    pub fn is_top_of_hour(&self) -> bool {
        self.minute == 0 && self.second == 0
    }
}

impl std::fmt::Display for LocalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.is_dst {
            write!(f, " DST")?;
        }
        Ok(())
    }
}
