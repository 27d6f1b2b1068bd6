//! Event-driven computation entry points.
//!
//! The host delivers three kinds of events: a minute tick, a resolved
//! timezone and a resolved location. Each call runs one synchronous pass
//! from the committed state and returns everything the renderer needs.
//!
//! Caching: clock angles are recomputed on every tick; sunrise/sunset when
//! the clock hour changes; the moon phase when the calendar day changes.
//! Timezone and location events force a full refresh.

use sunclock_astro::{GeoLocation, MoonPhase, compute_solar_times};
use sunclock_time::LocalTime;
use tracing::{debug, warn};

use crate::config::FaceConfig;
use crate::context::{ObservationContext, ObserverState, SharedObservation};
use crate::error::FaceError;
use crate::presentation::{ClockAngles, DayNightInfo, map_day_night};
use crate::timezone::{normalize_solar_times, timezone_from_host, validate_offset};

/// Result of a minute tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutput {
    pub angles: ClockAngles,
    /// Recomputed labels and path, `None` when unchanged since the last pass.
    pub day_night: Option<DayNightInfo>,
    /// Recomputed moon phase, `None` when the day has not changed.
    pub moon: Option<MoonPhase>,
    /// Top of the hour with chimes enabled.
    pub hourly_chime: bool,
    /// Ask the collaborators for a fresh timezone and location.
    pub request_refresh: bool,
}

/// Result of a timezone or location event.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshOutput {
    pub context: ObservationContext,
    pub day_night: DayNightInfo,
    pub moon: MoonPhase,
    /// Set after a timezone update: the host should now resolve location.
    pub request_location: bool,
}

/// Sun/moon clock face state.
#[derive(Debug, Clone)]
pub struct SunClock {
    config: FaceConfig,
    observer: ObserverState,
    solar_hour: Option<u32>,
    moon_jdn: Option<i64>,
    day_night: Option<DayNightInfo>,
    moon: Option<MoonPhase>,
}

impl SunClock {
    /// Create a clock from validated configuration.
    pub fn new(config: FaceConfig) -> Result<Self, FaceError> {
        config.validate()?;
        let observer = ObserverState::new(config.default_timezone_hours, config.default_location)?;
        Ok(Self {
            config,
            observer,
            solar_hour: None,
            moon_jdn: None,
            day_night: None,
            moon: None,
        })
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Currently committed location and timezone.
    pub fn observer(&self) -> ObserverState {
        self.observer
    }

    /// Labels and path from the most recent solar pass.
    pub fn day_night(&self) -> Option<&DayNightInfo> {
        self.day_night.as_ref()
    }

    /// Moon phase from the most recent lunar pass.
    pub fn moon(&self) -> Option<MoonPhase> {
        self.moon
    }

    fn snapshot(&self, time: &LocalTime) -> ObservationContext {
        ObservationContext::new(*time, self.observer)
    }

    fn compute_day_night(&self, ctx: &ObservationContext) -> Result<DayNightInfo, FaceError> {
        let (year, month, day) = ctx.time.date();
        let ut = compute_solar_times(year, month, day, &ctx.location, &self.config.rise_set)?;
        let local = normalize_solar_times(ut, ctx.timezone_offset_hours, ctx.is_dst());
        let info = map_day_night(&local, self.config.clock_style, self.config.path_radius);
        if !info.sunrise.is_available() || !info.sunset.is_available() {
            warn!(
                latitude = ctx.latitude(),
                date = %ctx.time,
                sunrise = ?local.sunrise,
                sunset = ?local.sunset,
                "solar event unavailable"
            );
        }
        debug!(
            sunrise = %info.sunrise.text,
            sunset = %info.sunset.text,
            "day/night recomputed"
        );
        Ok(info)
    }

    fn compute_moon(ctx: &ObservationContext) -> MoonPhase {
        let moon = MoonPhase::from_jdn(ctx.time.julian_day_number(), ctx.latitude());
        debug!(jdn = moon.jdn, index = moon.index, glyph = %moon.glyph, "moon phase recomputed");
        moon
    }

    fn refresh(
        &mut self,
        time: &LocalTime,
        request_location: bool,
    ) -> Result<RefreshOutput, FaceError> {
        let ctx = self.snapshot(time);
        let day_night = self.compute_day_night(&ctx)?;
        let moon = Self::compute_moon(&ctx);
        self.solar_hour = Some(time.hour);
        self.moon_jdn = Some(moon.jdn);
        self.day_night = Some(day_night.clone());
        self.moon = Some(moon);
        Ok(RefreshOutput {
            context: ctx,
            day_night,
            moon,
            request_location,
        })
    }

    /// Minute tick from the host clock.
    #[tracing::instrument(level = "debug", skip(self, time), fields(time = %time))]
    pub fn on_tick(&mut self, time: &LocalTime) -> Result<TickOutput, FaceError> {
        let ctx = self.snapshot(time);
        let angles = ClockAngles::at(time.hour, time.minute);

        let day_night = if self.solar_hour != Some(time.hour) {
            let info = self.compute_day_night(&ctx)?;
            self.solar_hour = Some(time.hour);
            self.day_night = Some(info.clone());
            Some(info)
        } else {
            None
        };

        let jdn = time.julian_day_number();
        let moon = if self.moon_jdn != Some(jdn) {
            let phase = Self::compute_moon(&ctx);
            self.moon_jdn = Some(jdn);
            self.moon = Some(phase);
            Some(phase)
        } else {
            None
        };

        Ok(TickOutput {
            angles,
            request_refresh: day_night.is_some(),
            day_night,
            moon,
            hourly_chime: self.config.hourly_chime && time.is_top_of_hour(),
        })
    }

    /// Timezone resolved by the host: `offset_seconds` includes DST when
    /// `is_dst` is set.
    #[tracing::instrument(level = "debug", skip(self, time))]
    pub fn on_timezone_resolved(
        &mut self,
        offset_seconds: i32,
        is_dst: bool,
        time: &LocalTime,
    ) -> Result<RefreshOutput, FaceError> {
        let hours = validate_offset(timezone_from_host(offset_seconds, is_dst))?;
        self.observer.timezone_offset_hours = hours;
        debug!(timezone_offset_hours = hours, "timezone committed");
        self.refresh(time, true)
    }

    /// Location resolved by the collaborator.
    #[tracing::instrument(level = "debug", skip(self, time))]
    pub fn on_location_resolved(
        &mut self,
        latitude: f64,
        longitude: f64,
        time: &LocalTime,
    ) -> Result<RefreshOutput, FaceError> {
        let observer = ObserverState::new(
            self.observer.timezone_offset_hours,
            GeoLocation::new(latitude, longitude),
        )?;
        self.observer = observer;
        debug!(latitude, longitude, "location committed");
        self.refresh(time, false)
    }

    /// Apply whatever collaborator threads published since the last drain.
    ///
    /// Timezone is applied before location, matching the host's request
    /// order. Returns the output of the last refresh, if any.
    ///
    /// A rejected timezone does not block a pending location: the location
    /// is still committed and the timezone error is returned afterwards.
    pub fn drain_shared(
        &mut self,
        shared: &SharedObservation,
        time: &LocalTime,
    ) -> Result<Option<RefreshOutput>, FaceError> {
        let pending = shared.take();
        let mut last = None;
        let mut rejected = None;
        if let Some((offset_seconds, is_dst)) = pending.timezone {
            match self.on_timezone_resolved(offset_seconds, is_dst, time) {
                Ok(out) => last = Some(out),
                Err(err) => {
                    warn!(offset_seconds, %err, "pending timezone rejected");
                    rejected = Some(err);
                }
            }
        }
        if let Some((latitude, longitude)) = pending.location {
            last = Some(self.on_location_resolved(latitude, longitude, time)?);
        }
        match rejected {
            Some(err) => Err(err),
            None => Ok(last),
        }
    }
}
