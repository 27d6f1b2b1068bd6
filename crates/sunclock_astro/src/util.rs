//! Shared normalization helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0.
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an hour value to [0, 24).
pub fn normalize_24(hours: f64) -> f64 {
    let r = hours.rem_euclid(24.0);
    if r >= 24.0 { 0.0 } else { r }
}
