//! Astronomical calculations behind the sun/moon clock face.
//!
//! This crate provides:
//! - Clock-hand rotation fractions for the 12h, 24h and minute hands
//! - Moon phase index (0..=27) with hemisphere correction and glyph lookup
//! - Sunrise/sunset and twilight times from date, location and zenith
//!
//! Everything here is a closed-form, allocation-free function of its
//! inputs; there is no ephemeris and no global state.

pub mod angles;
pub mod error;
pub mod moon;
pub mod riseset;
pub mod riseset_types;
pub mod util;

pub use angles::{
    FULL_TURN_UNITS, hour_angle_12, hour_angle_24, minute_angle, turn_to_rotation, wrap_turn,
};
pub use error::AstroError;
pub use moon::{
    FULL_MOON_INDEX, MAX_PHASE_INDEX, MOON_GLYPHS, MoonPhase, NEW_MOON_INDEX, hemisphere_corrected,
    moon_glyph, moon_phase_index,
};
pub use riseset::{
    compute_all_events, compute_rise_set, compute_solar_times, cos_hour_angle, sunrise_local_time,
    sunset_local_time,
};
pub use riseset_types::{
    GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, SolarTimes, ZENITH_ASTRONOMICAL_DEG,
    ZENITH_CIVIL_DEG, ZENITH_NAUTICAL_DEG, ZENITH_OFFICIAL_DEG,
};
pub use util::{normalize_24, normalize_360};
