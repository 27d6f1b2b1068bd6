//! Face configuration.

use sunclock_astro::{FULL_TURN_UNITS, GeoLocation, RiseSetConfig};

use crate::error::FaceError;
use crate::presentation::{ClockStyle, DEFAULT_PATH_RADIUS};
use crate::timezone::validate_offset;

/// Static settings for a [`crate::SunClock`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceConfig {
    /// Location used until the location collaborator answers.
    pub default_location: GeoLocation,
    /// Timezone offset (hours, DST removed) used until the host answers.
    pub default_timezone_hours: f64,
    /// Zenith choice for sunrise/sunset.
    pub rise_set: RiseSetConfig,
    /// Radius of the sun indicator path in face units.
    pub path_radius: f64,
    /// 12h or 24h label formatting.
    pub clock_style: ClockStyle,
    /// Raise `hourly_chime` on the tick at `hh:00:00`.
    pub hourly_chime: bool,
    /// Host rotation units per full turn.
    pub full_turn_units: i32,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            default_location: GeoLocation::new(51.4779, 0.0),
            default_timezone_hours: 0.0,
            rise_set: RiseSetConfig::default(),
            path_radius: DEFAULT_PATH_RADIUS,
            clock_style: ClockStyle::default(),
            hourly_chime: false,
            full_turn_units: FULL_TURN_UNITS,
        }
    }
}

impl FaceConfig {
    /// Location used until the collaborator answers.
    pub fn with_location(mut self, latitude_deg: f64, longitude_deg: f64) -> Self {
        self.default_location = GeoLocation::new(latitude_deg, longitude_deg);
        self
    }

    /// Offset from UT used until the host reports its timezone.
    pub fn with_timezone_hours(mut self, hours: f64) -> Self {
        self.default_timezone_hours = hours;
        self
    }

    /// 12- or 24-hour sunrise/sunset labels.
    pub fn with_clock_style(mut self, style: ClockStyle) -> Self {
        self.clock_style = style;
        self
    }

    /// Raise the tick's hourly chime flag at `hh:00:00`.
    pub fn with_hourly_chime(mut self, enabled: bool) -> Self {
        self.hourly_chime = enabled;
        self
    }

    /// Check every field; called by [`crate::SunClock::new`].
    pub fn validate(&self) -> Result<(), FaceError> {
        self.default_location.validate()?;
        validate_offset(self.default_timezone_hours)?;
        let z = self.rise_set.horizon_zenith_deg;
        if !z.is_finite() || !(0.0..=180.0).contains(&z) {
            return Err(FaceError::InvalidConfig("zenith must be in [0, 180] degrees"));
        }
        if !self.path_radius.is_finite() || self.path_radius <= 0.0 {
            return Err(FaceError::InvalidConfig("path radius must be positive"));
        }
        if self.full_turn_units <= 0 {
            return Err(FaceError::InvalidConfig("full turn must be positive"));
        }
        Ok(())
    }
}
