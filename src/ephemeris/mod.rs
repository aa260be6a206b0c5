//! Solar ephemeris.
//!
//! The simulator talks to the ephemeris through [`SolarEphemeris`]: a rise/set
//! search, the apparent position of the Sun on the observer's horizon, and the
//! time of solar transit. [`SpaSun`] implements it on top of the NREL Solar
//! Position Algorithm from `solar-positioning`.

pub mod observer;
pub mod spa;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use solar_positioning::RefractionCorrection;

use crate::core::Result;

pub use observer::Observer;
pub use spa::SpaSun;

/// Which horizon crossing a rise/set search looks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiseSetDirection {
    Rising,
    Setting,
}

impl fmt::Display for RiseSetDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rising => f.write_str("rise"),
            Self::Setting => f.write_str("set"),
        }
    }
}

/// Atmospheric refraction applied to apparent altitudes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Refraction {
    /// Geometric altitude.
    None,
    /// Standard atmosphere (1013.25 hPa, 15 °C).
    #[default]
    Normal,
}

impl Refraction {
    pub fn correction(self) -> Option<RefractionCorrection> {
        match self {
            Self::None => None,
            Self::Normal => Some(RefractionCorrection::standard()),
        }
    }
}

/// Position on the observer's sky.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoordinates {
    /// Degrees clockwise from north, `[0, 360)`.
    pub azimuth: f64,
    /// Degrees above the horizon, `[-90, 90]`.
    pub altitude: f64,
}

/// Highest point of the Sun in a day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Culmination {
    pub instant: DateTime<Utc>,
    /// Apparent altitude in degrees, refraction included.
    pub altitude: f64,
}

/// Source of solar positions.
pub trait SolarEphemeris {
    /// First sunrise or sunset in `[start, start + limit_days]`, or `None`
    /// when the Sun does not cross the horizon in that window.
    fn search_rise_set(
        &self,
        observer: &Observer,
        direction: RiseSetDirection,
        start: DateTime<Utc>,
        limit_days: f64,
    ) -> Result<Option<DateTime<Utc>>>;

    /// Apparent topocentric azimuth and altitude of the Sun at `instant`.
    fn horizon(
        &self,
        instant: DateTime<Utc>,
        observer: &Observer,
        refraction: Refraction,
    ) -> Result<HorizontalCoordinates>;

    /// First solar transit in `[start, start + limit_days]`.
    fn search_transit(
        &self,
        observer: &Observer,
        start: DateTime<Utc>,
        limit_days: f64,
    ) -> Result<Option<DateTime<Utc>>>;

    /// Transit instant and the refracted altitude of the Sun at that instant.
    fn culmination(
        &self,
        observer: &Observer,
        start: DateTime<Utc>,
        limit_days: f64,
    ) -> Result<Option<Culmination>> {
        let Some(instant) = self.search_transit(observer, start, limit_days)? else {
            return Ok(None);
        };
        let altitude = self.horizon(instant, observer, Refraction::Normal)?.altitude;
        Ok(Some(Culmination { instant, altitude }))
    }
}
