//! End-to-end passes through the event entry points.

use std::sync::{Arc, Once};
use std::thread;

use sunclock_face::{
    Alignment, ClockStyle, FaceConfig, FaceError, SharedObservation, Slot, SunClock,
    UNAVAILABLE_TEXT,
};
use sunclock_time::LocalTime;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn solstice(hour: u32, minute: u32, is_dst: bool) -> LocalTime {
    LocalTime::new(2024, 6, 21, hour, minute, 0, is_dst).unwrap()
}

fn hours_close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("event should be available");
    assert!(
        (actual - expected).abs() < 0.01,
        "got {actual:.3}h, expected {expected:.3}h"
    );
}

#[test]
fn solstice_52n_with_dst_active() {
    init_tracing();
    let mut clock = SunClock::new(FaceConfig::default()).unwrap();
    let now = solstice(9, 30, true);

    // Host reports +2h including DST → committed +1h
    let tz = clock.on_timezone_resolved(7200, true, &now).unwrap();
    assert!(tz.request_location);

    let out = clock.on_location_resolved(52.0, 0.0, &now).unwrap();
    assert!(!out.request_location);

    // UT 3.640 / 20.423 shifted by +1h, no extra DST hour
    hours_close(out.day_night.sunrise.hour, 4.640);
    hours_close(out.day_night.sunset.hour, 21.423);
    assert_eq!(out.day_night.sunrise.text, "04:38");
    assert_eq!(out.day_night.sunset.text, "21:25");

    // Both outside 06-18: sunrise top, sunset bottom right
    assert_eq!(out.day_night.sunrise.slot, Slot::Top);
    assert_eq!(out.day_night.sunrise.bottom_text(), "");
    assert_eq!(out.day_night.sunset.slot, Slot::Bottom);
    assert_eq!(out.day_night.sunset.alignment, Alignment::Right);

    let rise = out.day_night.path.sunrise.unwrap();
    let set = out.day_night.path.sunset.unwrap();
    // Morning vertex left of centre, evening vertex right
    assert!(rise.dx < 0.0 && set.dx > 0.0);
    assert!((rise.dx.hypot(rise.dy) - 120.0).abs() < 1e-9);
}

#[test]
fn dst_inactive_adds_correction_hour() {
    init_tracing();
    let mut clock = SunClock::new(FaceConfig::default()).unwrap();
    let now = solstice(9, 30, false);
    clock.on_timezone_resolved(3600, false, &now).unwrap();
    let out = clock.on_location_resolved(52.0, 0.0, &now).unwrap();
    hours_close(out.day_night.sunrise.hour, 5.640);
    hours_close(out.day_night.sunset.hour, 21.423 + 1.0);
}

#[test]
fn twelve_hour_labels() {
    let config = FaceConfig::default().with_clock_style(ClockStyle::TwelveHour);
    let mut clock = SunClock::new(config).unwrap();
    let now = solstice(9, 30, true);
    clock.on_timezone_resolved(7200, true, &now).unwrap();
    let out = clock.on_location_resolved(52.0, 0.0, &now).unwrap();
    assert_eq!(out.day_night.sunrise.text, " 4:38");
    assert_eq!(out.day_night.sunset.text, " 9:25");
}

#[test]
fn arctic_reports_unavailable_not_garbage() {
    init_tracing();
    let mut clock = SunClock::new(FaceConfig::default()).unwrap();
    let now = solstice(12, 0, true);
    let out = clock.on_location_resolved(78.0, 15.6, &now).unwrap();
    assert!(!out.day_night.sunrise.is_available());
    assert!(!out.day_night.sunset.is_available());
    assert_eq!(out.day_night.sunrise.text, UNAVAILABLE_TEXT);
    assert_eq!(out.day_night.sunset.text, UNAVAILABLE_TEXT);
    assert!(out.day_night.path.sunrise.is_none());
    assert!(out.day_night.path.sunset.is_none());
}

#[test]
fn southern_moon_is_mirrored() {
    let mut clock = SunClock::new(FaceConfig::default()).unwrap();
    let now = LocalTime::new(2024, 1, 1, 20, 0, 0, true).unwrap();
    let north = clock.on_location_resolved(51.5, 0.0, &now).unwrap().moon;
    let south = clock.on_location_resolved(-33.87, 151.21, &now).unwrap().moon;
    assert_eq!(north.index, 18);
    assert_eq!(south.index, 10);
    assert_eq!(south.glyph, 'j');
}

#[test]
fn moon_recomputed_on_day_change_only() {
    let mut clock = SunClock::new(FaceConfig::default()).unwrap();
    let late = LocalTime::new(2024, 6, 21, 23, 59, 0, false).unwrap();
    let midnight = LocalTime::new(2024, 6, 22, 0, 0, 0, false).unwrap();
    let first = clock.on_tick(&late).unwrap();
    assert_eq!(first.moon.unwrap().raw_index, 13);
    let next = clock.on_tick(&midnight).unwrap();
    assert_eq!(next.moon.unwrap().raw_index, 14);
    assert!(next.day_night.is_some());
    let again = clock.on_tick(&LocalTime::new(2024, 6, 22, 0, 1, 0, false).unwrap()).unwrap();
    assert!(again.moon.is_none());
    assert_eq!(clock.moon().unwrap().raw_index, 14);
}

#[test]
fn tick_angles_in_unit_range() {
    let mut clock = SunClock::new(FaceConfig::default()).unwrap();
    for hour in 0..24 {
        for minute in [0, 17, 59] {
            let t = LocalTime::new(2024, 3, 1, hour, minute, 0, false).unwrap();
            let a = clock.on_tick(&t).unwrap().angles;
            for f in [
                a.hour_hand_fraction,
                a.minute_hand_fraction,
                a.day_indicator_fraction,
            ] {
                assert!((0.0..1.0).contains(&f), "{t}: {f}");
            }
        }
    }
}

#[test]
fn invalid_clock_fields_fail_fast() {
    let err = LocalTime::new(2024, 6, 21, 24, 0, 0, false).unwrap_err();
    let face: FaceError = err.into();
    assert!(matches!(face, FaceError::Time(_)));
}

#[test]
fn shared_mailbox_drained_at_pass_boundary() {
    init_tracing();
    let shared = Arc::new(SharedObservation::new());
    let writer = Arc::clone(&shared);
    thread::spawn(move || {
        writer.publish_timezone(7200, true);
        writer.publish_location(52.0, 0.0);
    })
    .join()
    .unwrap();

    let mut clock = SunClock::new(FaceConfig::default()).unwrap();
    let now = solstice(9, 30, true);
    let out = clock.drain_shared(&shared, &now).unwrap().unwrap();
    assert_eq!(out.context.timezone_offset_hours, 1.0);
    assert_eq!(out.context.location.latitude_deg, 52.0);
    assert_eq!(out.day_night.sunrise.text, "04:38");
    assert!(clock.drain_shared(&shared, &now).unwrap().is_none());
}
