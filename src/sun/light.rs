//! Sun light position from horizontal sky coordinates.
//!
//! The scene's horizontal plane is XZ with +Y up. Azimuth from the ephemeris
//! is measured clockwise from north; the scene is rotated a quarter turn
//! against that, so azimuth 0 lands on +X.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::ephemeris::HorizontalCoordinates;

/// Rotation from compass azimuth to the scene's local axes, in degrees.
pub const AZIMUTH_OFFSET_DEGREES: f64 = 90.0;

/// Direction of the Sun on the observer's sky.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkyDirection {
    /// Degrees clockwise from north, `[0, 360)`.
    pub azimuth_degrees: f64,
    /// Degrees above the horizon, `[-90, 90]`.
    pub altitude_degrees: f64,
}

impl From<HorizontalCoordinates> for SkyDirection {
    fn from(hor: HorizontalCoordinates) -> Self {
        Self {
            azimuth_degrees: hor.azimuth,
            altitude_degrees: hor.altitude,
        }
    }
}

/// Light state handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightState {
    /// World-space light position. `y` is never negative.
    pub position: DVec3,
    /// False while the Sun is below the horizon.
    pub intensity_on: bool,
}

impl LightState {
    /// Point the light always looks at.
    pub const TARGET: DVec3 = DVec3::ZERO;

    /// Place the light on a sphere of `radius` around the origin in the
    /// direction of `sky`, clamped to the horizon.
    pub fn from_sky(sky: SkyDirection, radius: f64) -> Self {
        let altitude = sky.altitude_degrees.to_radians();
        let azimuth = (sky.azimuth_degrees + AZIMUTH_OFFSET_DEGREES).to_radians();

        let y = radius * altitude.sin();
        let projected = radius * altitude.cos();
        let x = projected * azimuth.sin();
        let z = -projected * azimuth.cos();

        if y < 0.0 {
            Self {
                position: DVec3::new(x, 0.0, z),
                intensity_on: false,
            }
        } else {
            Self {
                position: DVec3::new(x, y, z),
                intensity_on: true,
            }
        }
    }

    /// Renderer intensity given the configured "on" intensity.
    #[inline]
    pub fn intensity(&self, on_intensity: f32) -> f32 {
        if self.intensity_on { on_intensity } else { 0.0 }
    }
}

/// Anything that owns a live sun light and can take a new state.
pub trait LightSink {
    /// Overwrite the light wholesale. Calls never overlap; the last one wins.
    fn apply_light(&mut self, light: &LightState, on_intensity: f32);
}
