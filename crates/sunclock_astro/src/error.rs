//! Error types for the astronomical calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sunclock_time::TimeError;

use crate::riseset_types::RiseSetEvent;

/// Errors from solar, lunar and angle calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AstroError {
    /// Calendar input rejected.
    Time(TimeError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// The hour-angle cosine fell outside [-1, 1]: the event does not occur
    /// on this date at this latitude (polar day or polar night).
    PolarDomain {
        event: RiseSetEvent,
        cos_hour_angle: f64,
    },
}

impl AstroError {
    /// True when the domain failure is a midnight sun (Sun never sets).
    pub fn is_midnight_sun(&self) -> bool {
        matches!(self, Self::PolarDomain { cos_hour_angle, .. } if *cos_hour_angle < -1.0)
    }

    /// True when the domain failure is a polar night (Sun never rises).
    pub fn is_polar_night(&self) -> bool {
        matches!(self, Self::PolarDomain { cos_hour_angle, .. } if *cos_hour_angle > 1.0)
    }
}

impl Display for AstroError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::PolarDomain {
                event,
                cos_hour_angle,
            } => {
                let why = if *cos_hour_angle < -1.0 {
                    "sun never sets"
                } else {
                    "sun never rises"
                };
                write!(
                    f,
                    "no {} today: {why} (cos H = {cos_hour_angle:.4})",
                    event.name()
                )
            }
        }
    }
}

impl Error for AstroError {}

impl From<TimeError> for AstroError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
