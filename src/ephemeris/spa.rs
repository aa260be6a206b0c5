//! `SolarEphemeris` backed by the NREL Solar Position Algorithm.
//!
//! Positions come from `spa::solar_position`. Sunrise, transit and sunset
//! come from `spa::sunrise_sunset_for_horizon` one UTC day at a time; a
//! search window is answered by asking for every UTC day it touches and
//! keeping the earliest event inside the window.

use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, NaiveDate, SubsecRound, TimeDelta, Utc};
use solar_positioning::{spa, Horizon, SunriseResult};

use super::{HorizontalCoordinates, Observer, Refraction, RiseSetDirection, SolarEphemeris};
use crate::core::{Error, Result};

/// Default ΔT (TT − UT1) in seconds.
pub const DEFAULT_DELTA_T: f64 = 69.2;

/// Years the algorithm is valid for.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = -2000..=6000;

/// Events of one UTC day.
#[derive(Clone, Copy, Debug, PartialEq)]
struct DayEvents {
    rise: Option<DateTime<Utc>>,
    transit: DateTime<Utc>,
    set: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpaSun {
    /// ΔT in seconds passed to every calculation.
    pub delta_t: f64,
}

impl SpaSun {
    pub fn new(delta_t: f64) -> Self {
        Self { delta_t }
    }

    fn day_events(&self, observer: &Observer, day: NaiveDate) -> Result<DayEvents> {
        check_year(day)?;
        let midnight = day.and_time(chrono::NaiveTime::MIN).and_utc();
        let result = spa::sunrise_sunset_for_horizon(
            midnight,
            observer.latitude,
            observer.longitude,
            self.delta_t,
            Horizon::SunriseSunset,
        )
        .map_err(|e| Error::Ephemeris(e.to_string()))?;

        Ok(match result {
            SunriseResult::RegularDay { sunrise, transit, sunset } => DayEvents {
                rise: Some(to_utc_ms(sunrise)),
                transit: to_utc_ms(transit),
                set: Some(to_utc_ms(sunset)),
            },
            SunriseResult::AllDay { transit } | SunriseResult::AllNight { transit } => DayEvents {
                rise: None,
                transit: to_utc_ms(transit),
                set: None,
            },
        })
    }

    /// Earliest event picked by `pick` in `[start, start + limit_days]`.
    fn first_in_window(
        &self,
        observer: &Observer,
        start: DateTime<Utc>,
        limit_days: f64,
        pick: impl Fn(&DayEvents) -> Option<DateTime<Utc>>,
    ) -> Result<Option<DateTime<Utc>>> {
        let Some(end) = window_end(start, limit_days)? else {
            return Ok(None);
        };

        // Events of a UTC day can spill into its neighbours at extreme longitudes.
        let first = start.date_naive().pred_opt().unwrap_or(start.date_naive());
        let last = end.date_naive().succ_opt().unwrap_or(end.date_naive());

        for day in first.iter_days().take_while(|d| *d <= last) {
            let events = self.day_events(observer, day)?;
            if let Some(t) = pick(&events).filter(|t| *t >= start && *t <= end) {
                return Ok(Some(t));
            }
        }
        Ok(None)
    }
}

impl Default for SpaSun {
    fn default() -> Self {
        Self::new(DEFAULT_DELTA_T)
    }
}

fn check_year(day: NaiveDate) -> Result<()> {
    if SUPPORTED_YEARS.contains(&day.year()) {
        Ok(())
    } else {
        Err(Error::InstantOutOfRange)
    }
}

fn to_utc_ms<Tz: chrono::TimeZone>(t: DateTime<Tz>) -> DateTime<Utc> {
    t.with_timezone(&Utc).round_subsecs(3)
}

/// End of a search window. `None` for an empty or non-finite window.
fn window_end(start: DateTime<Utc>, limit_days: f64) -> Result<Option<DateTime<Utc>>> {
    if !limit_days.is_finite() || limit_days <= 0.0 {
        return Ok(None);
    }
    let ms = (limit_days * 86_400_000.0).round();
    if ms > i64::MAX as f64 {
        return Err(Error::InstantOutOfRange);
    }
    TimeDelta::try_milliseconds(ms as i64)
        .and_then(|span| start.checked_add_signed(span))
        .map(Some)
        .ok_or(Error::InstantOutOfRange)
}

impl SolarEphemeris for SpaSun {
    fn search_rise_set(
        &self,
        observer: &Observer,
        direction: RiseSetDirection,
        start: DateTime<Utc>,
        limit_days: f64,
    ) -> Result<Option<DateTime<Utc>>> {
        self.first_in_window(observer, start, limit_days, |events| match direction {
            RiseSetDirection::Rising => events.rise,
            RiseSetDirection::Setting => events.set,
        })
    }

    fn horizon(
        &self,
        instant: DateTime<Utc>,
        observer: &Observer,
        refraction: Refraction,
    ) -> Result<HorizontalCoordinates> {
        check_year(instant.date_naive())?;
        let position = spa::solar_position(
            instant,
            observer.latitude,
            observer.longitude,
            observer.elevation,
            self.delta_t,
            refraction.correction(),
        )
        .map_err(|e| Error::Ephemeris(e.to_string()))?;

        Ok(HorizontalCoordinates {
            azimuth: position.azimuth(),
            altitude: position.elevation_angle(),
        })
    }

    fn search_transit(
        &self,
        observer: &Observer,
        start: DateTime<Utc>,
        limit_days: f64,
    ) -> Result<Option<DateTime<Utc>>> {
        self.first_in_window(observer, start, limit_days, |events| Some(events.transit))
    }
}
