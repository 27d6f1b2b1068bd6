//! Error types for the clock-face layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sunclock_astro::AstroError;
use sunclock_time::TimeError;

/// Errors from a computation pass.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FaceError {
    /// Calendar/clock fields rejected.
    Time(TimeError),
    /// Astronomical calculation rejected its input.
    Astro(AstroError),
    /// Timezone offset not finite or not strictly within ±24 h.
    InvalidTimezone(f64),
    /// Configuration value out of range.
    InvalidConfig(&'static str),
}

impl Display for FaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Astro(e) => write!(f, "astro error: {e}"),
            Self::InvalidTimezone(h) => write!(f, "timezone offset {h} h outside (-24, 24)"),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl Error for FaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Astro(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for FaceError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<AstroError> for FaceError {
    fn from(e: AstroError) -> Self {
        Self::Astro(e)
    }
}
