//! Sun position mapper.
//!
//! Maps a calendar date and a slider position ("hours since sunrise" on a
//! 0-12 scale) to a light state. The slider divides the daylight window into
//! twelve equal parts, so 0 is sunrise, 6 is roughly solar noon and 12 is
//! sunset regardless of season.

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::ephemeris::{Observer, Refraction, RiseSetDirection, SolarEphemeris};

use super::clock::clock_label;
use super::config::SunConfig;
use super::light::{LightState, SkyDirection};

/// Number of slider units between sunrise and sunset.
pub const DAY_FRACTION_SPAN: f64 = 12.0;

/// One user selection: a date and a slider position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    pub date: NaiveDate,
    /// Hours since sunrise on a 0-12 scale. Not clamped; values outside the
    /// range extrapolate past sunrise or sunset.
    pub day_fraction: f64,
}

/// Sunrise and sunset bounding a simulated day.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SunEvent {
    pub rise: DateTime<Utc>,
    pub set: DateTime<Utc>,
}

impl SunEvent {
    /// Time between sunrise and sunset.
    pub fn day_length(&self) -> TimeDelta {
        self.set - self.rise
    }

    /// `rise + day_length * day_fraction / 12`, to the millisecond.
    pub fn instant_at(&self, day_fraction: f64) -> Result<DateTime<Utc>> {
        if !day_fraction.is_finite() {
            return Err(Error::InvalidDayFraction(day_fraction));
        }

        let day_ms = self.day_length().num_milliseconds() as f64;
        let offset_ms = (day_ms * day_fraction / DAY_FRACTION_SPAN).round();
        let offset = TimeDelta::try_milliseconds(offset_ms as i64).ok_or(Error::InstantOutOfRange)?;
        self.rise
            .checked_add_signed(offset)
            .ok_or(Error::InstantOutOfRange)
    }
}

/// Everything computed for one [`SimulationInput`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SunReport {
    pub input: SimulationInput,
    pub window: SunEvent,
    /// Instant the slider position maps to.
    pub instant: DateTime<Utc>,
    pub sky: SkyDirection,
    pub light: LightState,
    /// `HH:MM` of `instant` in the display time zone.
    pub clock_label: String,
}

/// Stateless mapper from user input to light state for a fixed observer.
pub struct SunMapper<E> {
    ephemeris: E,
    observer: Observer,
    orbit_radius: f64,
    search_horizon_days: f64,
    tz: Tz,
}

impl<E: SolarEphemeris> SunMapper<E> {
    /// Create a mapper from configuration.
    pub fn new(config: &SunConfig, ephemeris: E) -> Result<Self> {
        if !config.orbit_radius.is_finite() || config.orbit_radius <= 0.0 {
            return Err(Error::Config(format!(
                "orbit_radius must be positive, got {}",
                config.orbit_radius
            )));
        }
        if !config.search_horizon_days.is_finite() || config.search_horizon_days <= 0.0 {
            return Err(Error::Config(format!(
                "search_horizon_days must be positive, got {}",
                config.search_horizon_days
            )));
        }
        Ok(Self {
            ephemeris,
            observer: config.observer,
            orbit_radius: config.orbit_radius,
            search_horizon_days: config.search_horizon_days,
            tz: config.time_zone,
        })
    }

    #[inline]
    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    #[inline]
    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    #[inline]
    pub fn time_zone(&self) -> &Tz {
        &self.tz
    }

    /// Start of `date` in the display time zone. When midnight falls in a DST
    /// gap the day starts at the first valid local time after it.
    pub fn local_midnight(&self, date: NaiveDate) -> Result<DateTime<Utc>> {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| Error::InvalidDate(date.to_string()))?;
        let local = self.tz.from_local_datetime(&naive).earliest().or_else(|| {
            naive
                .checked_add_signed(TimeDelta::hours(1))
                .and_then(|later| self.tz.from_local_datetime(&later).earliest())
        });
        local
            .map(|t| t.with_timezone(&Utc))
            .ok_or(Error::InstantOutOfRange)
    }

    /// Sunrise and sunset following local midnight of `date`.
    pub fn day_window(&self, date: NaiveDate) -> Result<SunEvent> {
        let midnight = self.local_midnight(date)?;
        let find = |direction| {
            self.ephemeris
                .search_rise_set(&self.observer, direction, midnight, self.search_horizon_days)?
                .ok_or(Error::EventNotFound { direction, date })
        };

        Ok(SunEvent {
            rise: find(RiseSetDirection::Rising)?,
            set: find(RiseSetDirection::Setting)?,
        })
    }

    /// Apparent direction of the Sun at `instant`.
    pub fn sky_direction(&self, instant: DateTime<Utc>) -> Result<SkyDirection> {
        Ok(self
            .ephemeris
            .horizon(instant, &self.observer, Refraction::Normal)?
            .into())
    }

    /// Run the full mapping for one input.
    pub fn map(&self, input: SimulationInput) -> Result<SunReport> {
        let window = self.day_window(input.date)?;
        let instant = window.instant_at(input.day_fraction)?;
        let sky = self.sky_direction(instant)?;
        let light = LightState::from_sky(sky, self.orbit_radius);
        let label = clock_label(instant, &self.tz);

        log::debug!(
            "Sun at {} ({}): azimuth={:.3} altitude={:.3} fraction={} on={}",
            label,
            input.date,
            sky.azimuth_degrees,
            sky.altitude_degrees,
            input.day_fraction,
            light.intensity_on,
        );

        Ok(SunReport {
            input,
            window,
            instant,
            sky,
            light,
            clock_label: label,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{HorizontalCoordinates, SpaSun};

    /// Ephemeris with a fixed day window and a fixed sky position.
    struct FixedSky {
        rise: Option<DateTime<Utc>>,
        set: Option<DateTime<Utc>>,
        sky: HorizontalCoordinates,
    }

    impl FixedSky {
        fn new(azimuth: f64, altitude: f64) -> Self {
            Self {
                rise: Some(Utc.with_ymd_and_hms(2025, 12, 21, 4, 35, 0).unwrap()),
                set: Some(Utc.with_ymd_and_hms(2025, 12, 21, 14, 39, 0).unwrap()),
                sky: HorizontalCoordinates { azimuth, altitude },
            }
        }
    }

    impl SolarEphemeris for FixedSky {
        fn search_rise_set(
            &self,
            _observer: &Observer,
            direction: RiseSetDirection,
            _start: DateTime<Utc>,
            _limit_days: f64,
        ) -> Result<Option<DateTime<Utc>>> {
            Ok(match direction {
                RiseSetDirection::Rising => self.rise,
                RiseSetDirection::Setting => self.set,
            })
        }

        fn horizon(&self, _: DateTime<Utc>, _: &Observer, _: Refraction) -> Result<HorizontalCoordinates> {
            Ok(self.sky)
        }

        fn search_transit(&self, _: &Observer, _: DateTime<Utc>, _: f64) -> Result<Option<DateTime<Utc>>> {
            Ok(None)
        }
    }

    fn solstice() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 21).unwrap()
    }

    fn input(day_fraction: f64) -> SimulationInput {
        SimulationInput {
            date: solstice(),
            day_fraction,
        }
    }

    fn real_mapper() -> SunMapper<SpaSun> {
        SunMapper::new(&SunConfig::default(), SpaSun::default()).unwrap()
    }

    #[test]
    fn test_boundary_law() {
        let mapper = SunMapper::new(&SunConfig::default(), FixedSky::new(0.0, 10.0)).unwrap();
        let at_rise = mapper.map(input(0.0)).unwrap();
        let at_set = mapper.map(input(12.0)).unwrap();
        assert_eq!(at_rise.instant, at_rise.window.rise);
        assert_eq!(at_set.instant, at_set.window.set);
    }

    #[test]
    fn test_boundary_law_real_ephemeris() {
        let mapper = real_mapper();
        let window = mapper.day_window(solstice()).unwrap();
        assert_eq!(window.instant_at(0.0).unwrap(), window.rise);
        assert_eq!(window.instant_at(12.0).unwrap(), window.set);
    }

    #[test]
    fn test_midpoint() {
        let mapper = SunMapper::new(&SunConfig::default(), FixedSky::new(0.0, 10.0)).unwrap();
        let report = mapper.map(input(6.0)).unwrap();
        // 04:35 + (10h04m / 2) = 09:37 UTC = 11:37 local
        assert_eq!(report.instant, Utc.with_ymd_and_hms(2025, 12, 21, 9, 37, 0).unwrap());
        assert_eq!(report.clock_label, "11:37");
    }

    #[test]
    fn test_monotonic_in_day_fraction() {
        let window = real_mapper().day_window(solstice()).unwrap();
        let mut prev = window.instant_at(0.0).unwrap();
        for step in 1..=120 {
            let t = window.instant_at(step as f64 * 0.1).unwrap();
            assert!(t >= prev, "instant went backwards at fraction {}", step as f64 * 0.1);
            prev = t;
        }
    }

    #[test]
    fn test_fraction_in_range_stays_in_window() {
        let window = real_mapper().day_window(solstice()).unwrap();
        for step in 0..=24 {
            let t = window.instant_at(step as f64 * 0.5).unwrap();
            assert!(t >= window.rise && t <= window.set);
        }
    }

    #[test]
    fn test_out_of_range_fraction_extrapolates() {
        let mapper = SunMapper::new(&SunConfig::default(), FixedSky::new(0.0, 10.0)).unwrap();
        let before = mapper.map(input(-1.0)).unwrap();
        let after = mapper.map(input(13.0)).unwrap();
        assert!(before.instant < before.window.rise);
        assert!(after.instant > after.window.set);
    }

    #[test]
    fn test_non_finite_fraction_rejected() {
        let mapper = SunMapper::new(&SunConfig::default(), FixedSky::new(0.0, 10.0)).unwrap();
        assert!(matches!(mapper.map(input(f64::NAN)), Err(Error::InvalidDayFraction(_))));
        assert!(matches!(
            mapper.map(input(f64::INFINITY)),
            Err(Error::InvalidDayFraction(_))
        ));
    }

    #[test]
    fn test_huge_fraction_out_of_range() {
        let mapper = SunMapper::new(&SunConfig::default(), FixedSky::new(0.0, 10.0)).unwrap();
        assert!(matches!(mapper.map(input(1e18)), Err(Error::InstantOutOfRange)));
    }

    #[test]
    fn test_horizon_clamp_through_mapper() {
        let mapper = SunMapper::new(&SunConfig::default(), FixedSky::new(250.0, -12.0)).unwrap();
        let report = mapper.map(input(3.0)).unwrap();
        assert_eq!(report.light.position.y, 0.0);
        assert!(!report.light.intensity_on);
        assert_eq!(report.sky.altitude_degrees, -12.0);
    }

    #[test]
    fn test_azimuth_offset_through_mapper() {
        let mapper = SunMapper::new(&SunConfig::default(), FixedSky::new(0.0, 0.0)).unwrap();
        let report = mapper.map(input(6.0)).unwrap();
        let p = report.light.position;
        assert!((p.x - 150.0).abs() < 1e-9 && p.y.abs() < 1e-9 && p.z.abs() < 1e-9, "p = {p:?}");
    }

    #[test]
    fn test_missing_sunrise_propagates() {
        let mut eph = FixedSky::new(0.0, 10.0);
        eph.rise = None;
        let mapper = SunMapper::new(&SunConfig::default(), eph).unwrap();
        match mapper.map(input(6.0)) {
            Err(Error::EventNotFound { direction, date }) => {
                assert_eq!(direction, RiseSetDirection::Rising);
                assert_eq!(date, solstice());
            }
            other => panic!("expected EventNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_sunset_propagates() {
        let mut eph = FixedSky::new(0.0, 10.0);
        eph.set = None;
        let mapper = SunMapper::new(&SunConfig::default(), eph).unwrap();
        assert!(matches!(
            mapper.map(input(6.0)),
            Err(Error::EventNotFound { direction: RiseSetDirection::Setting, .. })
        ));
    }

    #[test]
    fn test_polar_night_fails() {
        let config = SunConfig {
            observer: Observer::new(80.0, 15.0, 0.0),
            ..Default::default()
        };
        let mapper = SunMapper::new(&config, SpaSun::default()).unwrap();
        assert!(matches!(mapper.map(input(6.0)), Err(Error::EventNotFound { .. })));
    }

    #[test]
    fn test_far_future_date_out_of_range() {
        let config = SunConfig {
            time_zone: Tz::UTC,
            ..Default::default()
        };
        let mapper = SunMapper::new(&config, SpaSun::default()).unwrap();
        let at_max = SimulationInput {
            date: NaiveDate::MAX,
            day_fraction: 6.0,
        };
        assert!(matches!(mapper.map(at_max), Err(Error::InstantOutOfRange)));
        // Jerusalem midnight of the last date is still representable.
        let jerusalem = real_mapper();
        assert!(matches!(jerusalem.map(at_max), Err(Error::InstantOutOfRange)));
    }

    #[test]
    fn test_summer_midnight_uses_daylight_time() {
        let mapper = real_mapper();
        let midsummer = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap();
        let midnight = mapper.local_midnight(midsummer).unwrap();
        assert_eq!(midnight, Utc.with_ymd_and_hms(2025, 6, 20, 21, 0, 0).unwrap());
    }

    #[test]
    fn test_window_belongs_to_local_date_east_of_utc() {
        // Tokyo (UTC+9): local midnight is 15:00 UTC of the previous day, and
        // sunrise falls on the previous UTC date.
        let config = SunConfig {
            observer: Observer::new(35.6762, 139.6503, 40.0),
            time_zone: chrono_tz::Asia::Tokyo,
            ..Default::default()
        };
        let mapper = SunMapper::new(&config, SpaSun::default()).unwrap();
        let midnight = mapper.local_midnight(solstice()).unwrap();
        assert_eq!(midnight, Utc.with_ymd_and_hms(2025, 12, 20, 15, 0, 0).unwrap());

        let window = mapper.day_window(solstice()).unwrap();
        let tz = mapper.time_zone();
        assert_eq!(window.rise.date_naive(), NaiveDate::from_ymd_opt(2025, 12, 20).unwrap());
        assert_eq!(window.rise.with_timezone(tz).date_naive(), solstice());
        assert_eq!(window.set.with_timezone(tz).date_naive(), solstice());
        assert!(window.rise < window.set);

        let report = mapper.map(input(0.0)).unwrap();
        assert!(report.clock_label.starts_with("06:"), "{}", report.clock_label);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad_radius = SunConfig {
            orbit_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            SunMapper::new(&bad_radius, SpaSun::default()),
            Err(Error::Config(_))
        ));
        let bad_horizon = SunConfig {
            search_horizon_days: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            SunMapper::new(&bad_horizon, SpaSun::default()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_local_midnight() {
        let mapper = real_mapper();
        let midnight = mapper.local_midnight(solstice()).unwrap();
        assert_eq!(midnight, Utc.with_ymd_and_hms(2025, 12, 20, 22, 0, 0).unwrap());
    }

    #[test]
    fn test_jerusalem_noon_matches_culmination() {
        let mapper = real_mapper();
        let report = mapper.map(input(6.0)).unwrap();
        let midnight = mapper.local_midnight(solstice()).unwrap();
        let peak = mapper
            .ephemeris()
            .culmination(mapper.observer(), midnight, 1.0)
            .unwrap()
            .unwrap();

        assert!(
            (report.sky.altitude_degrees - peak.altitude).abs() < 0.1,
            "noon altitude {} vs culmination {}",
            report.sky.altitude_degrees,
            peak.altitude
        );
        // Midpoint of the daylight window lies within a couple of minutes of transit.
        assert!((report.instant - peak.instant).num_seconds().abs() < 120);
        assert!(report.light.intensity_on);
        assert!(report.light.position.y > 0.0);
        // Sun is due south at noon; south maps to -X
        assert!((report.sky.azimuth_degrees - 180.0).abs() < 2.0);
        assert!(report.light.position.x < -100.0);
    }

    #[test]
    fn test_jerusalem_sunrise_and_sunset_light() {
        let mapper = real_mapper();
        let morning = mapper.map(input(0.0)).unwrap();
        let evening = mapper.map(input(12.0)).unwrap();

        // At the rise/set crossing the refracted centre is a few tenths of a
        // degree below the horizon, so the light is clamped off.
        for report in [&morning, &evening] {
            assert!(report.sky.altitude_degrees.abs() < 0.5);
            assert!(report.light.position.y >= 0.0);
        }
        // Winter sun rises in the south-east, sets in the south-west
        assert!(morning.sky.azimuth_degrees > 90.0 && morning.sky.azimuth_degrees < 180.0);
        assert!(evening.sky.azimuth_degrees > 180.0 && evening.sky.azimuth_degrees < 270.0);
    }
}
