//! Sunrise/sunset computation with twilight variants.
//!
//! Closed-form algorithm from the Almanac for Computers (1990, Nautical
//! Almanac Office, USNO): day of year → approximate event time → solar
//! mean anomaly → true longitude → right ascension → declination → local
//! hour angle at the target zenith → local mean time → UT.
//!
//! Accurate to about a minute between ±60° latitude. No iteration, no
//! ephemeris; intended for display, not navigation.

use sunclock_time::{day_of_year, validate_date};
use tracing::{debug, trace};

use crate::error::AstroError;
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, SolarTimes};
use crate::util::{normalize_24, normalize_360};

/// Mean daily motion of the Sun in degrees.
const MEAN_MOTION_DEG_PER_DAY: f64 = 0.9856;

/// Mean anomaly at day 0 of the year, degrees.
const MEAN_ANOMALY_OFFSET_DEG: f64 = 3.289;

/// Longitude of perihelion plus 180°, degrees.
const PERIHELION_TERM_DEG: f64 = 282.634;

/// cos and sin of the obliquity of the ecliptic (23.44°).
const COS_OBLIQUITY: f64 = 0.91764;
const SIN_OBLIQUITY: f64 = 0.39782;

/// Solar day to sidereal day conversion for local mean time, hours per day.
const SIDEREAL_DRIFT_HOURS_PER_DAY: f64 = 0.06571;

/// Local mean time offset of the RA origin, hours.
const LMT_OFFSET_HOURS: f64 = 6.622;

/// Intermediate solar quantities for one event, in degrees unless noted.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SolarPosition {
    /// Approximate event time in days since Jan 0.
    t_days: f64,
    /// Right ascension in hours.
    ra_hours: f64,
    sin_dec: f64,
    cos_dec: f64,
}

/// Sun position at the approximate time of a rising or setting event.
fn solar_position(day_of_year: u32, longitude_hours: f64, rising: bool) -> SolarPosition {
    let approx_local_hour = if rising { 6.0 } else { 18.0 };
    let t_days = day_of_year as f64 + (approx_local_hour - longitude_hours) / 24.0;

    let mean_anomaly = MEAN_MOTION_DEG_PER_DAY * t_days - MEAN_ANOMALY_OFFSET_DEG;
    let m_rad = mean_anomaly.to_radians();
    let true_longitude = normalize_360(
        mean_anomaly + 1.916 * m_rad.sin() + 0.020 * (2.0 * m_rad).sin() + PERIHELION_TERM_DEG,
    );
    let l_rad = true_longitude.to_radians();

    // atan only covers two quadrants; shift RA into L's quadrant.
    let ra = normalize_360((COS_OBLIQUITY * l_rad.tan()).atan().to_degrees());
    let l_quadrant = (true_longitude / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    let ra_hours = (ra + l_quadrant - ra_quadrant) / 15.0;

    let sin_dec = SIN_OBLIQUITY * l_rad.sin();
    let cos_dec = sin_dec.asin().cos();

    trace!(
        day_of_year,
        t_days,
        mean_anomaly,
        true_longitude,
        ra_hours,
        sin_dec,
        "solar position"
    );

    SolarPosition {
        t_days,
        ra_hours,
        sin_dec,
        cos_dec,
    }
}

/// Cosine of the local hour angle at which the Sun reaches `zenith_deg`.
///
/// Outside [-1, 1] the event does not happen: > 1 the Sun stays below the
/// threshold, < -1 it stays above.
pub fn cos_hour_angle(zenith_deg: f64, latitude_deg: f64, sin_dec: f64, cos_dec: f64) -> f64 {
    let phi = latitude_deg.to_radians();
    (zenith_deg.to_radians().cos() - sin_dec * phi.sin()) / (cos_dec * phi.cos())
}

/// Event time in UT hours for a given day of year.
fn event_hour_ut(
    day_of_year: u32,
    location: &GeoLocation,
    event: RiseSetEvent,
    zenith_deg: f64,
) -> RiseSetResult {
    let lng_hour = location.longitude_hours();
    let rising = event.is_rising();
    let pos = solar_position(day_of_year, lng_hour, rising);

    let cos_h = cos_hour_angle(zenith_deg, location.latitude_deg, pos.sin_dec, pos.cos_dec);
    if cos_h > 1.0 {
        return RiseSetResult::NeverRises;
    }
    if cos_h < -1.0 {
        return RiseSetResult::NeverSets;
    }

    let h_deg = cos_h.acos().to_degrees();
    let h_hours = (if rising { 360.0 - h_deg } else { h_deg }) / 15.0;

    let local_mean_time =
        h_hours + pos.ra_hours - SIDEREAL_DRIFT_HOURS_PER_DAY * pos.t_days - LMT_OFFSET_HOURS;
    let hour = normalize_24(local_mean_time - lng_hour);

    RiseSetResult::Event { hour, event }
}

/// Compute a single rise/set event for the Sun.
///
/// # Returns
/// * `RiseSetResult::Event` with the event time in UT hours, [0, 24)
/// * `RiseSetResult::NeverRises` if the Sun stays below the threshold (polar night)
/// * `RiseSetResult::NeverSets` if the Sun stays above it (midnight sun)
///
/// # Errors
/// Rejects impossible dates and out-of-range coordinates.
pub fn compute_rise_set(
    year: i32,
    month: u32,
    day: u32,
    location: &GeoLocation,
    event: RiseSetEvent,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, AstroError> {
    validate_date(year, month, day)?;
    location.validate()?;
    let n = day_of_year(year, month, day);
    let result = event_hour_ut(n, location, event, config.zenith_for(event));
    if !matches!(result, RiseSetResult::Event { .. }) {
        debug!(
            year,
            month,
            day,
            latitude = location.latitude_deg,
            event = event.name(),
            ?result,
            "no solar event"
        );
    }
    Ok(result)
}

/// Sunrise and sunset (UT hours) for one date.
pub fn compute_solar_times(
    year: i32,
    month: u32,
    day: u32,
    location: &GeoLocation,
    config: &RiseSetConfig,
) -> Result<SolarTimes, AstroError> {
    Ok(SolarTimes {
        sunrise: compute_rise_set(year, month, day, location, RiseSetEvent::Sunrise, config)?,
        sunset: compute_rise_set(year, month, day, location, RiseSetEvent::Sunset, config)?,
    })
}

/// Compute all 8 rise/set events for a day.
///
/// Returns results in chronological order:
/// AstronomicalDawn, NauticalDawn, CivilDawn, Sunrise,
/// Sunset, CivilDusk, NauticalDusk, AstronomicalDusk.
pub fn compute_all_events(
    year: i32,
    month: u32,
    day: u32,
    location: &GeoLocation,
    config: &RiseSetConfig,
) -> Result<Vec<RiseSetResult>, AstroError> {
    let events = [
        RiseSetEvent::AstronomicalDawn,
        RiseSetEvent::NauticalDawn,
        RiseSetEvent::CivilDawn,
        RiseSetEvent::Sunrise,
        RiseSetEvent::Sunset,
        RiseSetEvent::CivilDusk,
        RiseSetEvent::NauticalDusk,
        RiseSetEvent::AstronomicalDusk,
    ];

    let mut results = Vec::with_capacity(events.len());
    for &evt in &events {
        results.push(compute_rise_set(year, month, day, location, evt, config)?);
    }
    Ok(results)
}

fn local_time_or_domain_error(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    zenith_deg: f64,
    event: RiseSetEvent,
) -> Result<f64, AstroError> {
    validate_date(year, month, day)?;
    let location = GeoLocation::new(latitude, longitude);
    location.validate()?;
    let n = day_of_year(year, month, day);
    match event_hour_ut(n, &location, event, zenith_deg) {
        RiseSetResult::Event { hour, .. } => Ok(hour),
        RiseSetResult::NeverRises | RiseSetResult::NeverSets => {
            let pos = solar_position(n, location.longitude_hours(), event.is_rising());
            Err(AstroError::PolarDomain {
                event,
                cos_hour_angle: cos_hour_angle(zenith_deg, latitude, pos.sin_dec, pos.cos_dec),
            })
        }
    }
}

/// Sunrise time in UT hours [0, 24) for a date, location and zenith.
///
/// # Errors
/// [`AstroError::PolarDomain`] when the Sun does not cross `zenith_deg`
/// on this date; never a wrapped or clamped time.
pub fn sunrise_local_time(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    zenith_deg: f64,
) -> Result<f64, AstroError> {
    local_time_or_domain_error(
        year,
        month,
        day,
        latitude,
        longitude,
        zenith_deg,
        RiseSetEvent::Sunrise,
    )
}

/// Sunset time in UT hours [0, 24). See [`sunrise_local_time`].
pub fn sunset_local_time(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    zenith_deg: f64,
) -> Result<f64, AstroError> {
    local_time_or_domain_error(
        year,
        month,
        day,
        latitude,
        longitude,
        zenith_deg,
        RiseSetEvent::Sunset,
    )
}
