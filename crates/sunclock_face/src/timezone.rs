//! Timezone and DST correction of raw solar times.
//!
//! Solar times come out of the calculator in UT. The face shifts them by
//! the committed timezone offset, then adds one hour when the host reports
//! that DST is *not* active. The host's timezone callback already removed
//! an hour from the offset when DST *is* active (see
//! [`timezone_from_host`]), and the two conventions must stay paired.

use sunclock_astro::SolarTimes;

use crate::error::FaceError;

/// Hour added to solar times when DST is not in effect.
pub const DST_CORRECTION_HOURS: f64 = 1.0;

/// Shift `time_hour` by `timezone_offset_hours` and wrap once into [0, 24).
///
/// Single wrap, not a modulo: the offset must satisfy |offset| < 24 and
/// `time_hour` must already be in [0, 24).
pub fn adjust(time_hour: f64, timezone_offset_hours: f64) -> f64 {
    let mut t = time_hour + timezone_offset_hours;
    if t >= 24.0 {
        t -= 24.0;
    }
    if t < 0.0 {
        t += 24.0;
    }
    // A tiny negative sum rounds up to exactly 24.0.
    if t >= 24.0 { 0.0 } else { t }
}

/// Extra hours applied on top of the timezone offset.
pub fn dst_correction(is_dst: bool) -> f64 {
    if is_dst { 0.0 } else { DST_CORRECTION_HOURS }
}

/// UT hour to local clock hour in [0, 24).
pub fn normalize_hour(ut_hour: f64, timezone_offset_hours: f64, is_dst: bool) -> f64 {
    adjust(adjust(ut_hour, timezone_offset_hours), dst_correction(is_dst))
}

/// Normalize both events; polar states stay unavailable.
pub fn normalize_solar_times(
    times: SolarTimes,
    timezone_offset_hours: f64,
    is_dst: bool,
) -> SolarTimes {
    times.map_hours(|h| normalize_hour(h, timezone_offset_hours, is_dst))
}

/// Committed offset in hours from the host's timezone callback.
///
/// `offset_seconds` includes DST when `is_dst`; the face stores the
/// offset with that hour removed.
pub fn timezone_from_host(offset_seconds: i32, is_dst: bool) -> f64 {
    let hours = f64::from(offset_seconds) / 3600.0;
    if is_dst { hours - 1.0 } else { hours }
}

/// Reject offsets the single-wrap [`adjust`] cannot handle.
pub fn validate_offset(timezone_offset_hours: f64) -> Result<f64, FaceError> {
    if timezone_offset_hours.is_finite() && timezone_offset_hours.abs() < 24.0 {
        Ok(timezone_offset_hours)
    } else {
        Err(FaceError::InvalidTimezone(timezone_offset_hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunclock_astro::{RiseSetEvent, RiseSetResult};

    #[test]
    fn adjust_wraps_once() {
        assert_eq!(adjust(25.5, 0.0), 1.5);
        assert_eq!(adjust(-1.0, 0.0), 23.0);
        assert_eq!(adjust(10.0, 5.0), 15.0);
        assert_eq!(adjust(20.0, -5.5), 14.5);
        assert_eq!(adjust(23.0, 1.0), 0.0);
    }

    #[test]
    fn adjust_never_returns_24() {
        assert_eq!(adjust(-1e-17, 0.0), 0.0);
        assert_eq!(adjust(1.0, -1.000_000_000_000_000_2), 0.0);
        assert!(adjust(0.0, -f64::EPSILON) < 24.0);
    }

    #[test]
    fn dst_convention() {
        assert_eq!(dst_correction(false), 1.0);
        assert_eq!(dst_correction(true), 0.0);
        assert_eq!(normalize_hour(3.5, 1.0, true), 4.5);
        assert_eq!(normalize_hour(3.5, 1.0, false), 5.5);
    }

    #[test]
    fn dst_bonus_rewraps() {
        let h = normalize_hour(22.5, 1.0, false);
        assert_eq!(h, 0.5);
    }

    #[test]
    fn host_timezone() {
        assert_eq!(timezone_from_host(3600, false), 1.0);
        assert_eq!(timezone_from_host(7200, true), 1.0);
        assert_eq!(timezone_from_host(-18_000, false), -5.0);
        assert_eq!(timezone_from_host(19_800, false), 5.5);
    }

    #[test]
    fn offset_validation() {
        assert_eq!(validate_offset(-11.0), Ok(-11.0));
        assert!(validate_offset(24.0).is_err());
        assert!(validate_offset(f64::NAN).is_err());
    }

    #[test]
    fn polar_state_passes_through() {
        let times = SolarTimes {
            sunrise: RiseSetResult::NeverRises,
            sunset: RiseSetResult::Event {
                hour: 23.5,
                event: RiseSetEvent::Sunset,
            },
        };
        let local = normalize_solar_times(times, 2.0, true);
        assert_eq!(local.sunrise, RiseSetResult::NeverRises);
        assert_eq!(local.sunset.hour(), Some(1.5));
    }
}
