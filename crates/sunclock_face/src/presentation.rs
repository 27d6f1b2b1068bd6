//! Mapping of normalized solar times and clock time onto face elements.
//!
//! Sunrise/sunset labels live in a top or bottom slot depending on whether
//! the event falls in the 06–18 daytime band; the sun indicator polygon
//! gets one vertex per event on a circle around the face centre.

use std::f64::consts::TAU;

use sunclock_astro::{
    RiseSetResult, SolarTimes, hour_angle_12, hour_angle_24, minute_angle, turn_to_rotation,
    wrap_turn,
};

/// Radius of the sun indicator path in face units.
pub const DEFAULT_PATH_RADIUS: f64 = 120.0;

/// Text shown for an event that does not happen today.
pub const UNAVAILABLE_TEXT: &str = "--:--";

/// Label format for sunrise and sunset times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockStyle {
    #[default]
    TwentyFourHour,
    TwelveHour,
}

/// Label slot on the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Top,
    Bottom,
}

/// Horizontal text alignment within a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// A formatted event time and where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct EventLabel {
    pub text: String,
    pub slot: Slot,
    pub alignment: Alignment,
    /// Local hour in [0, 24), `None` when the event does not occur.
    pub hour: Option<f64>,
}

impl EventLabel {
    /// Text for the top slot; empty when the label sits at the bottom.
    pub fn top_text(&self) -> &str {
        if self.slot == Slot::Top { &self.text } else { "" }
    }

    /// Text for the bottom slot; empty when the label sits at the top.
    pub fn bottom_text(&self) -> &str {
        if self.slot == Slot::Bottom { &self.text } else { "" }
    }

    pub fn is_available(&self) -> bool {
        self.hour.is_some()
    }
}

/// Strictly between 06:00 and 18:00.
pub fn is_daytime_hour(hour: f64) -> bool {
    hour > 6.0 && hour < 18.0
}

/// Daytime sunrise goes to the bottom slot, otherwise the top.
pub fn sunrise_slot(hour: f64) -> Slot {
    if is_daytime_hour(hour) {
        Slot::Bottom
    } else {
        Slot::Top
    }
}

/// Daytime sunset goes to the top slot, otherwise the bottom.
pub fn sunset_slot(hour: f64) -> Slot {
    if is_daytime_hour(hour) {
        Slot::Top
    } else {
        Slot::Bottom
    }
}

/// Format an hour in [0, 24) as `HH:MM` or space-padded 12-hour `h:MM`.
///
/// Minutes are truncated, not rounded.
pub fn format_hour(hour: f64, style: ClockStyle) -> String {
    let whole = hour.trunc();
    let h = whole as u32;
    let m = (60.0 * (hour - whole)) as u32;
    match style {
        ClockStyle::TwentyFourHour => format!("{h:02}:{m:02}"),
        ClockStyle::TwelveHour => {
            let h12 = match h % 12 {
                0 => 12,
                other => other,
            };
            format!("{h12:>2}:{m:02}")
        }
    }
}

fn event_text(result: &RiseSetResult, style: ClockStyle) -> String {
    match result.hour() {
        Some(h) => format_hour(h, style),
        None => UNAVAILABLE_TEXT.to_string(),
    }
}

/// Label for a normalized sunrise. An unavailable sunrise sits in the top slot.
pub fn sunrise_label(result: &RiseSetResult, style: ClockStyle) -> EventLabel {
    let hour = result.hour();
    EventLabel {
        text: event_text(result, style),
        slot: hour.map_or(Slot::Top, sunrise_slot),
        alignment: Alignment::Left,
        hour,
    }
}

/// Label for a normalized sunset, always right-aligned. An unavailable
/// sunset sits in the bottom slot.
pub fn sunset_label(result: &RiseSetResult, style: ClockStyle) -> EventLabel {
    let hour = result.hour();
    EventLabel {
        text: event_text(result, style),
        slot: hour.map_or(Slot::Bottom, sunset_slot),
        alignment: Alignment::Right,
        hour,
    }
}

/// Rotation of an hour on the sun path: `(h+12)/24·2π`, noon at the top.
pub fn path_angle_rad(hour_of_day: f64) -> f64 {
    (hour_of_day + 12.0) / 24.0 * TAU
}

/// Offset from the face centre of an hour on a circle of `radius`.
///
/// Screen y grows downward, hence `dy = −cos θ·r`.
pub fn circle_point(hour_of_day: f64, radius: f64) -> (f64, f64) {
    let theta = path_angle_rad(hour_of_day);
    (theta.sin() * radius, -theta.cos() * radius)
}

/// Truncate an offset to the host's 16-bit point type.
pub fn to_screen_offset((dx, dy): (f64, f64)) -> (i16, i16) {
    (dx as i16, dy as i16)
}

/// One vertex of the sun indicator polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub angle_rad: f64,
    pub dx: f64,
    pub dy: f64,
}

impl PathPoint {
    /// Path vertex for a local hour on a circle of `radius`.
    pub fn at_hour(hour_of_day: f64, radius: f64) -> Self {
        let (dx, dy) = circle_point(hour_of_day, radius);
        Self {
            angle_rad: path_angle_rad(hour_of_day),
            dx,
            dy,
        }
    }

    pub fn screen_offset(&self) -> (i16, i16) {
        to_screen_offset((self.dx, self.dy))
    }
}

/// Sun indicator vertices. `None` keeps the renderer's default vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPathAngles {
    pub sunrise: Option<PathPoint>,
    pub sunset: Option<PathPoint>,
}

impl SunPathAngles {
    pub fn from_times(times: &SolarTimes, radius: f64) -> Self {
        Self {
            sunrise: times.sunrise.hour().map(|h| PathPoint::at_hour(h, radius)),
            sunset: times.sunset.hour().map(|h| PathPoint::at_hour(h, radius)),
        }
    }

    pub fn sunrise_angle_rad(&self) -> Option<f64> {
        self.sunrise.map(|p| p.angle_rad)
    }

    pub fn sunset_angle_rad(&self) -> Option<f64> {
        self.sunset.map(|p| p.angle_rad)
    }
}

/// Everything the renderer needs for the day/night band.
#[derive(Debug, Clone, PartialEq)]
pub struct DayNightInfo {
    pub sunrise: EventLabel,
    pub sunset: EventLabel,
    pub path: SunPathAngles,
}

/// Build labels and path vertices from normalized solar times.
pub fn map_day_night(times: &SolarTimes, style: ClockStyle, radius: f64) -> DayNightInfo {
    DayNightInfo {
        sunrise: sunrise_label(&times.sunrise, style),
        sunset: sunset_label(&times.sunset, style),
        path: SunPathAngles::from_times(times, radius),
    }
}

/// Hand rotations as fractions of a turn, each in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockAngles {
    pub hour_hand_fraction: f64,
    pub minute_hand_fraction: f64,
    pub day_indicator_fraction: f64,
}

impl ClockAngles {
    pub fn at(hour: u32, minute: u32) -> Self {
        Self {
            hour_hand_fraction: wrap_turn(hour_angle_12(hour, minute)),
            minute_hand_fraction: wrap_turn(minute_angle(minute)),
            day_indicator_fraction: wrap_turn(hour_angle_24(hour, minute)),
        }
    }

    /// `(hour, minute, day)` in host rotation units.
    pub fn rotation_units(&self, full_turn: i32) -> (i32, i32, i32) {
        (
            turn_to_rotation(self.hour_hand_fraction, full_turn),
            turn_to_rotation(self.minute_hand_fraction, full_turn),
            turn_to_rotation(self.day_indicator_fraction, full_turn),
        )
    }
}
