//! Sun simulation configuration.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::ephemeris::Observer;

/// Parameters of the sun-position mapper and the defaults of its UI inputs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    /// Where the sky is observed from (default: Jerusalem).
    pub observer: Observer,
    /// Distance of the light from the world origin (default: 150.0).
    pub orbit_radius: f64,
    /// Light intensity while the Sun is above the horizon (default: 2.5).
    pub on_intensity: f32,
    /// How far past local midnight to search for sunrise and sunset, in days
    /// (default: 1.0).
    pub search_horizon_days: f64,
    /// IANA zone of the displayed clock (default: `Asia/Jerusalem`).
    /// Also defines local midnight of the selected date.
    pub time_zone: Tz,
    /// Date shown when the simulator starts (default: 2025-12-21).
    pub default_date: NaiveDate,
    /// Slider position at startup, hours since sunrise on a 0-12 scale
    /// (default: 6.0).
    pub default_day_fraction: f64,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            observer: Observer::jerusalem(),
            orbit_radius: 150.0,
            on_intensity: 2.5,
            search_horizon_days: 1.0,
            time_zone: chrono_tz::Asia::Jerusalem,
            default_date: NaiveDate::from_ymd_opt(2025, 12, 21).unwrap_or_default(),
            default_day_fraction: 6.0,
        }
    }
}
