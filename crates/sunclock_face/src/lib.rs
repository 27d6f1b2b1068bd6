//! Sun/moon clock face computations.
//!
//! Turns host events (minute ticks, resolved timezone, resolved location)
//! into the values a watch-face renderer draws:
//! - sunrise/sunset labels with slot placement, in local time
//! - sun indicator path vertices
//! - moon phase glyph
//! - hour, minute and 24-hour hand rotations
//!
//! # Quick start
//!
//! ```rust
//! use sunclock_face::{FaceConfig, SunClock};
//! use sunclock_time::LocalTime;
//!
//! let mut clock = SunClock::new(FaceConfig::default()).unwrap();
//! let now = LocalTime::new(2024, 6, 21, 8, 30, 0, true).unwrap();
//! clock.on_timezone_resolved(3600, true, &now).unwrap();
//! let refreshed = clock.on_location_resolved(52.0, 0.0, &now).unwrap();
//! println!("sunrise {}", refreshed.day_night.sunrise.text);
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod presentation;
pub mod timezone;

pub use config::FaceConfig;
pub use context::{ObservationContext, ObserverState, PendingUpdate, SharedObservation};
pub use engine::{RefreshOutput, SunClock, TickOutput};
pub use error::FaceError;
pub use presentation::{
    Alignment, ClockAngles, ClockStyle, DEFAULT_PATH_RADIUS, DayNightInfo, EventLabel, PathPoint,
    Slot, SunPathAngles, UNAVAILABLE_TEXT, circle_point, format_hour, is_daytime_hour,
    map_day_night, path_angle_rad, sunrise_label, sunrise_slot, sunset_label, sunset_slot,
    to_screen_offset,
};
pub use timezone::{
    DST_CORRECTION_HOURS, adjust, dst_correction, normalize_hour, normalize_solar_times,
    timezone_from_host, validate_offset,
};
