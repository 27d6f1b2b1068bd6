//! Types for sunrise/sunset and twilight calculations.
//!
//! Provides geographic location, event types, configuration, and result
//! types used by the rise/set computation module.

use crate::error::AstroError;

/// Zenith for the "official" sunrise/sunset: 90° plus ~50′ for refraction
/// and semidiameter, rounded to a whole degree as the face uses it.
pub const ZENITH_OFFICIAL_DEG: f64 = 91.0;

/// Zenith for civil twilight (Sun centre 6° below the horizon).
pub const ZENITH_CIVIL_DEG: f64 = 96.0;

/// Zenith for nautical twilight (12° below).
pub const ZENITH_NAUTICAL_DEG: f64 = 102.0;

/// Zenith for astronomical twilight (18° below).
pub const ZENITH_ASTRONOMICAL_DEG: f64 = 108.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a new geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Reject non-finite or out-of-range coordinates.
    pub fn validate(&self) -> Result<(), AstroError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(AstroError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(AstroError::InvalidLocation("longitude must be in [-180, 180]"));
        }
        Ok(())
    }

    /// Southern hemisphere (strictly negative latitude).
    pub fn is_southern(&self) -> bool {
        self.latitude_deg < 0.0
    }

    /// Longitude expressed in hours (15° per hour, east positive).
    pub fn longitude_hours(&self) -> f64 {
        self.longitude_deg / 15.0
    }
}

/// Rise/set event types, including twilight variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    Sunrise,
    Sunset,
    CivilDawn,
    CivilDusk,
    NauticalDawn,
    NauticalDusk,
    AstronomicalDawn,
    AstronomicalDusk,
}

impl RiseSetEvent {
    /// Standard zenith angle in degrees for this event.
    pub fn zenith_deg(self) -> f64 {
        match self {
            Self::Sunrise | Self::Sunset => ZENITH_OFFICIAL_DEG,
            Self::CivilDawn | Self::CivilDusk => ZENITH_CIVIL_DEG,
            Self::NauticalDawn | Self::NauticalDusk => ZENITH_NAUTICAL_DEG,
            Self::AstronomicalDawn | Self::AstronomicalDusk => ZENITH_ASTRONOMICAL_DEG,
        }
    }

    /// Whether this is a rising (morning) event.
    pub fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilDawn | Self::NauticalDawn | Self::AstronomicalDawn
        )
    }

    /// Lower-case human name, used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::CivilDawn => "civil dawn",
            Self::CivilDusk => "civil dusk",
            Self::NauticalDawn => "nautical dawn",
            Self::NauticalDusk => "nautical dusk",
            Self::AstronomicalDawn => "astronomical dawn",
            Self::AstronomicalDusk => "astronomical dusk",
        }
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Zenith used for `Sunrise`/`Sunset`. Default: 91°.
    /// Twilight events always use their standard zenith.
    pub horizon_zenith_deg: f64,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            horizon_zenith_deg: ZENITH_OFFICIAL_DEG,
        }
    }
}

impl RiseSetConfig {
    /// Zenith in degrees to use for `event`.
    pub fn zenith_for(&self, event: RiseSetEvent) -> f64 {
        match event {
            RiseSetEvent::Sunrise | RiseSetEvent::Sunset => self.horizon_zenith_deg,
            other => other.zenith_deg(),
        }
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at `hour`. Straight from the calculator this is UT in
    /// [0, 24); after timezone normalization it is local clock time.
    Event { hour: f64, event: RiseSetEvent },
    /// Sun stays below the threshold all day (polar night).
    NeverRises,
    /// Sun stays above the threshold all day (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    /// Event hour, or `None` for the polar states.
    pub fn hour(&self) -> Option<f64> {
        match self {
            Self::Event { hour, .. } => Some(*hour),
            Self::NeverRises | Self::NeverSets => None,
        }
    }

    /// Apply `f` to the event hour; polar states pass through unchanged.
    pub fn map_hour<F: FnOnce(f64) -> f64>(self, f: F) -> Self {
        match self {
            Self::Event { hour, event } => Self::Event {
                hour: f(hour),
                event,
            },
            other => other,
        }
    }
}

/// Sunrise and sunset for one date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTimes {
    pub sunrise: RiseSetResult,
    pub sunset: RiseSetResult,
}

impl SolarTimes {
    /// Apply `f` to both event hours.
    pub fn map_hours<F: Fn(f64) -> f64>(self, f: F) -> Self {
        Self {
            sunrise: self.sunrise.map_hour(&f),
            sunset: self.sunset.map_hour(&f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeniths() {
        assert_eq!(RiseSetEvent::Sunrise.zenith_deg(), 91.0);
        assert_eq!(RiseSetEvent::CivilDusk.zenith_deg(), 96.0);
        assert_eq!(RiseSetEvent::NauticalDawn.zenith_deg(), 102.0);
        assert_eq!(RiseSetEvent::AstronomicalDusk.zenith_deg(), 108.0);
    }

    #[test]
    fn is_rising_correct() {
        assert!(RiseSetEvent::Sunrise.is_rising());
        assert!(RiseSetEvent::CivilDawn.is_rising());
        assert!(RiseSetEvent::NauticalDawn.is_rising());
        assert!(RiseSetEvent::AstronomicalDawn.is_rising());
        assert!(!RiseSetEvent::Sunset.is_rising());
        assert!(!RiseSetEvent::CivilDusk.is_rising());
        assert!(!RiseSetEvent::NauticalDusk.is_rising());
        assert!(!RiseSetEvent::AstronomicalDusk.is_rising());
    }

    #[test]
    fn config_overrides_horizon_only() {
        let c = RiseSetConfig {
            horizon_zenith_deg: 90.833,
        };
        assert_eq!(c.zenith_for(RiseSetEvent::Sunset), 90.833);
        assert_eq!(c.zenith_for(RiseSetEvent::CivilDawn), 96.0);
        assert_eq!(RiseSetConfig::default().zenith_for(RiseSetEvent::Sunrise), 91.0);
    }

    #[test]
    fn location_validation() {
        assert!(GeoLocation::new(52.0, 0.0).validate().is_ok());
        assert!(GeoLocation::new(90.5, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, -181.0).validate().is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn longitude_hours() {
        assert_eq!(GeoLocation::new(0.0, -75.0).longitude_hours(), -5.0);
    }

    #[test]
    fn polar_states_survive_mapping() {
        let times = SolarTimes {
            sunrise: RiseSetResult::NeverSets,
            sunset: RiseSetResult::Event {
                hour: 20.0,
                event: RiseSetEvent::Sunset,
            },
        };
        let shifted = times.map_hours(|h| h + 1.0);
        assert_eq!(shifted.sunrise, RiseSetResult::NeverSets);
        assert_eq!(shifted.sunset.hour(), Some(21.0));
    }
}
