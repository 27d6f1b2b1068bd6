//! Calendar primitives for the sunclock face.
//!
//! This crate provides:
//! - Gregorian date → Julian Day Number (Fliegel–Van Flandern)
//! - Day-of-year for the solar event calculator
//! - `LocalTime`, the validated wall-clock fields from the host time source

pub mod error;
pub mod julian;
pub mod local_time;

pub use error::TimeError;
pub use julian::{
    J2000_JDN, checked_julian_day_number, day_of_year, days_in_month, is_leap_year,
    to_julian_day_number, validate_date,
};
pub use local_time::{HOST_YEAR_BASE, LocalTime};
