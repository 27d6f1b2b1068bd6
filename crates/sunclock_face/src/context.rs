//! Observation context: the inputs of one computation pass.
//!
//! Location and timezone are committed between passes by the collaborator
//! callbacks. A pass snapshots them together with the clock fields into an
//! immutable [`ObservationContext`] before computing anything.

use std::sync::{Mutex, MutexGuard};

use sunclock_astro::GeoLocation;
use sunclock_time::LocalTime;
use tracing::warn;

use crate::error::FaceError;
use crate::timezone::validate_offset;

/// Location and timezone as last committed by the collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverState {
    /// Offset from UT in hours, with any DST hour already removed.
    pub timezone_offset_hours: f64,
    pub location: GeoLocation,
}

impl ObserverState {
    /// Validated state; rejects offsets outside (-24, 24) and out-of-range
    /// coordinates.
    pub fn new(timezone_offset_hours: f64, location: GeoLocation) -> Result<Self, FaceError> {
        validate_offset(timezone_offset_hours)?;
        location.validate()?;
        Ok(Self {
            timezone_offset_hours,
            location,
        })
    }
}

/// Immutable inputs of a single computation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationContext {
    pub time: LocalTime,
    pub timezone_offset_hours: f64,
    pub location: GeoLocation,
}

impl ObservationContext {
    /// Snapshot `observer` together with the clock fields of `time`.
    pub fn new(time: LocalTime, observer: ObserverState) -> Self {
        Self {
            time,
            timezone_offset_hours: observer.timezone_offset_hours,
            location: observer.location,
        }
    }

    /// DST flag as reported by the host clock.
    pub fn is_dst(&self) -> bool {
        self.time.is_dst
    }

    /// Latitude in degrees, north positive.
    pub fn latitude(&self) -> f64 {
        self.location.latitude_deg
    }

    /// Longitude in degrees, east positive.
    pub fn longitude(&self) -> f64 {
        self.location.longitude_deg
    }
}

/// Updates published by collaborators running on another thread.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PendingUpdate {
    /// `(offset_seconds, is_dst)` as reported by the host.
    pub timezone: Option<(i32, bool)>,
    /// `(latitude, longitude)` in degrees.
    pub location: Option<(f64, f64)>,
}

impl PendingUpdate {
    /// Nothing published since the last drain.
    pub fn is_empty(&self) -> bool {
        self.timezone.is_none() && self.location.is_none()
    }
}

/// Single-writer/single-reader mailbox for multi-threaded hosts.
///
/// Collaborator threads publish; the event-loop thread drains with
/// [`SharedObservation::take`] at a pass boundary, so a pass never sees a
/// half-written location.
#[derive(Debug, Default)]
pub struct SharedObservation {
    pending: Mutex<PendingUpdate>,
}

impl SharedObservation {
    /// Empty mailbox.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, PendingUpdate> {
        self.pending.lock().unwrap_or_else(|poisoned| {
            warn!("observation mailbox lock poisoned; recovering");
            poisoned.into_inner()
        })
    }

    /// Replace any pending timezone with the host's raw callback values.
    pub fn publish_timezone(&self, offset_seconds: i32, is_dst: bool) {
        self.lock().timezone = Some((offset_seconds, is_dst));
    }

    /// Replace any pending location. Validation happens on drain.
    pub fn publish_location(&self, latitude: f64, longitude: f64) {
        self.lock().location = Some((latitude, longitude));
    }

    /// Remove and return everything published since the last call.
    pub fn take(&self) -> PendingUpdate {
        std::mem::take(&mut *self.lock())
    }
}
