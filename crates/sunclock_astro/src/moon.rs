//! Moon phase index and glyph selection.
//!
//! The synodic month is folded onto an index 0..=27 (0 = new, 14 = full)
//! by scaling the cycle fraction by 27 and rounding. The face's moon font
//! is drawn for northern-hemisphere orientation, so southern observers get
//! the mirrored index.

use sunclock_time::checked_julian_day_number;

use crate::error::AstroError;

/// Julian Date of the reference new moon (2000-01-06 ~14:24 TT).
pub const NEW_MOON_EPOCH_JD: f64 = 2_451_550.1;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

pub const NEW_MOON_INDEX: u8 = 0;
pub const FULL_MOON_INDEX: u8 = 14;
pub const MAX_PHASE_INDEX: u8 = 27;

/// Index scale: the cycle fraction is multiplied by this before rounding.
const PHASE_SCALE: f64 = 27.0;

/// Font glyph per phase index: 0 → '1', 1..=13 → 'a'..='m',
/// 14 → '0', 15..=27 → 'n'..='z'.
pub const MOON_GLYPHS: [char; 28] = [
    '1', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', //
    '0', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Moon phase index in [0, 27] for a Julian Day Number.
///
/// `frac((jdn − 2451550.1) / 29.530588853) · 27 + 0.5`, truncated. The
/// fraction keeps the sign of the cycle count, so dates before the epoch
/// give a negative scaled value; those are moved up one cycle.
pub fn moon_phase_index(jdn: i64) -> u8 {
    let cycles = (jdn as f64 - NEW_MOON_EPOCH_JD) / SYNODIC_MONTH_DAYS;
    let frac = cycles - cycles.trunc();
    let mut scaled = frac * PHASE_SCALE + 0.5;
    if scaled < 0.0 {
        scaled += PHASE_SCALE;
    }
    (scaled as u8).min(MAX_PHASE_INDEX)
}

/// Mirror the index for southern-hemisphere observers.
///
/// New moon (0) is left alone; everything else maps to `28 − index`.
/// Indices above 28 (never produced by [`moon_phase_index`]) saturate to 0.
pub fn hemisphere_corrected(index: u8, latitude_deg: f64) -> u8 {
    if latitude_deg < 0.0 && index > NEW_MOON_INDEX {
        28u8.saturating_sub(index)
    } else {
        index
    }
}

/// Glyph for a phase index, `None` above 27.
pub fn moon_glyph(index: u8) -> Option<char> {
    MOON_GLYPHS.get(index as usize).copied()
}

/// Moon phase for one calendar day at one latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoonPhase {
    pub jdn: i64,
    /// Index before hemisphere correction.
    pub raw_index: u8,
    /// Index shown on the face.
    pub index: u8,
    pub glyph: char,
}

impl MoonPhase {
    /// Phase for a Julian Day Number and observer latitude.
    pub fn from_jdn(jdn: i64, latitude_deg: f64) -> Self {
        let raw_index = moon_phase_index(jdn);
        let index = hemisphere_corrected(raw_index, latitude_deg);
        Self {
            jdn,
            raw_index,
            index,
            // index is always <= 27
            glyph: MOON_GLYPHS[index as usize],
        }
    }

    /// Phase for a calendar date.
    pub fn for_date(
        year: i32,
        month: u32,
        day: u32,
        latitude_deg: f64,
    ) -> Result<Self, AstroError> {
        let jdn = checked_julian_day_number(year, month, day)?;
        Ok(Self::from_jdn(jdn, latitude_deg))
    }

    /// Full moon before hemisphere correction.
    pub fn is_full(&self) -> bool {
        self.raw_index == FULL_MOON_INDEX
    }

    /// New moon; unaffected by hemisphere.
    pub fn is_new(&self) -> bool {
        self.raw_index == NEW_MOON_INDEX
    }
}
