//! Calendar date to Julian Day Number and day-of-year.
//!
//! Both conversions are integer formulas on the proleptic Gregorian
//! calendar. Division truncates toward zero, matching the published
//! forms of the formulas; do not replace `/` with `div_euclid`.

use crate::error::TimeError;

/// Julian Day Number of 2000-01-01 (the JDN of the day containing J2000.0).
pub const J2000_JDN: i64 = 2_451_545;

/// Julian Day Number for a Gregorian calendar date.
///
/// Fliegel & Van Flandern (1968), Communications of the ACM 11(10):
///
/// ```text
/// JDN = d − 32075
///     + 1461·(y + 4800 + (m − 14)/12) / 4
///     + 367·(m − 2 − (m − 14)/12·12) / 12
///     − 3·((y + 4900 + (m − 14)/12) / 100) / 4
/// ```
///
/// No range checks; see [`checked_julian_day_number`].
pub fn to_julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year);
    let m = i64::from(month);
    let d = i64::from(day);
    let a = (m - 14) / 12;
    d - 32_075 + 1461 * (y + 4800 + a) / 4 + 367 * (m - 2 - a * 12) / 12
        - 3 * ((y + 4900 + a) / 100) / 4
}

/// [`to_julian_day_number`] after validating month and day.
pub fn checked_julian_day_number(year: i32, month: u32, day: u32) -> Result<i64, TimeError> {
    validate_date(year, month, day)?;
    Ok(to_julian_day_number(year, month, day))
}

/// Ordinal day of the year (1-based).
///
/// Integer form from the Almanac for Computers (1990):
/// `N = ⌊275m/9⌋ − ⌊(m+9)/12⌋·N3 + d − 30`, where `N3` is 1 in leap years
/// and 2 otherwise. The leap test is the full Gregorian rule, so century
/// years such as 1900 and 2100 are common years.
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    let m = month as i32;
    let n1 = 275 * m / 9;
    let n2 = (m + 9) / 12;
    let n3 = if is_leap_year(year) { 1 } else { 2 };
    (n1 - n2 * n3 + day as i32 - 30) as u32
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, or `None` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Reject a month/day pair that does not exist.
pub fn validate_date(year: i32, month: u32, day: u32) -> Result<(), TimeError> {
    let max_day = days_in_month(year, month).ok_or(TimeError::InvalidMonth(month))?;
    if day == 0 || day > max_day {
        return Err(TimeError::InvalidDay { year, month, day });
    }
    Ok(())
}
