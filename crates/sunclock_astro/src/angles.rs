//! Clock-hand rotation helpers.
//!
//! The hour helpers return fractions of a full turn offset by 12 hours so
//! that noon lines up with the face's reference direction. Outputs are not
//! wrapped; the rotation consumer multiplies by its full-turn constant and
//! reduces modulo one turn. [`wrap_turn`] performs that reduction for
//! callers that need a value in [0, 1).

/// Host full-turn constant (`TRIG_MAX_ANGLE`).
pub const FULL_TURN_UNITS: i32 = 0x10000;

/// 24-hour day indicator: `(12 + hour + minute/60) / 24`.
pub fn hour_angle_24(hour: u32, minute: u32) -> f64 {
    (12.0 + hour as f64 + minute as f64 / 60.0) / 24.0
}

/// 12-hour hand: `(12 + hour + minute/60) / 12`.
pub fn hour_angle_12(hour: u32, minute: u32) -> f64 {
    (12.0 + hour as f64 + minute as f64 / 60.0) / 12.0
}

/// Minute hand: `30 + minute/60`.
///
/// The integer part is a whole number of turns; after [`wrap_turn`] this
/// is `minute/60`.
pub fn minute_angle(minute: u32) -> f64 {
    30.0 + minute as f64 / 60.0
}

/// Reduce a turn value to [0, 1).
pub fn wrap_turn(turns: f64) -> f64 {
    turns.rem_euclid(1.0)
}

/// Scale a turn value to the host rotation unit, truncating toward zero.
pub fn turn_to_rotation(turns: f64, full_turn: i32) -> i32 {
    (full_turn as f64 * turns) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_decreases(values: &[f64]) -> usize {
        values.windows(2).filter(|w| w[1] < w[0]).count()
    }

    fn whole_day<F: Fn(u32, u32) -> f64>(f: F) -> Vec<f64> {
        (0..24)
            .flat_map(|h| (0..60).map(move |m| (h, m)))
            .map(|(h, m)| wrap_turn(f(h, m)))
            .collect()
    }

    #[test]
    fn hour_24_midnight_and_noon() {
        assert_eq!(hour_angle_24(0, 0), 0.5);
        assert_eq!(wrap_turn(hour_angle_24(12, 0)), 0.0);
        assert!((hour_angle_24(18, 30) - 30.5 / 24.0).abs() < 1e-12);
    }

    #[test]
    fn hour_12_values() {
        assert_eq!(hour_angle_12(0, 0), 1.0);
        assert_eq!(wrap_turn(hour_angle_12(3, 0)), 0.25);
        assert_eq!(wrap_turn(hour_angle_12(15, 0)), 0.25);
    }

    #[test]
    fn minute_angle_exact() {
        assert_eq!(minute_angle(0), 30.0);
        assert_eq!(minute_angle(30), 30.5);
        assert!((wrap_turn(minute_angle(45)) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn hour_24_monotonic_with_one_wrap() {
        let v = whole_day(hour_angle_24);
        assert!(v.iter().all(|x| (0.0..1.0).contains(x)));
        assert_eq!(count_decreases(&v), 1);
    }

    #[test]
    fn hour_12_monotonic_with_one_wrap() {
        let v = whole_day(hour_angle_12);
        assert!(v.iter().all(|x| (0.0..1.0).contains(x)));
        assert_eq!(count_decreases(&v), 1);
    }

    #[test]
    fn rotation_units() {
        assert_eq!(turn_to_rotation(0.5, FULL_TURN_UNITS), 0x8000);
        assert_eq!(turn_to_rotation(0.0, FULL_TURN_UNITS), 0);
        assert_eq!(turn_to_rotation(30.5, FULL_TURN_UNITS), 30 * 0x10000 + 0x8000);
    }
}
