//! Control protocol - JSON command/response definitions

use serde::{Deserialize, Serialize};

/// Commands sent from a UI or script to the control server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", content = "params")]
pub enum ControlCommand {
    /// Select the calendar date, `YYYY-MM-DD`
    SetDate { date: String },
    /// Move the day slider; 0 is sunrise, 12 is sunset
    SetDayFraction { value: f64 },
    /// Get the current sun light state
    GetLightState,
    /// Get the clock and slider labels
    GetLabels,
    /// Get scene statistics and camera defaults
    GetSceneInfo,
    /// Ping (health check)
    Ping,
}

/// Responses from the control server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum ControlResponse {
    #[serde(rename = "ok")]
    Ok { data: ResponseData },
    #[serde(rename = "error")]
    Error { message: String },
}

/// Response data variants. Ordered most specific first so untagged
/// deserialization picks the right one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    LightState {
        date: String,
        day_fraction: f64,
        /// Derived instant, RFC 3339 UTC
        instant: String,
        azimuth_degrees: f64,
        altitude_degrees: f64,
        position: [f64; 3],
        intensity_on: bool,
        intensity: f32,
        time_label: String,
    },
    SceneInfo {
        node_count: u32,
        mesh_count: u32,
        light_count: u32,
        shadow_casters: u32,
        sky_color: u32,
        camera_position: [f32; 3],
        camera_fov_degrees: f32,
    },
    Labels {
        time_label: String,
        hour_label: String,
    },
    Pong { message: String },
}

impl ControlResponse {
    pub fn ok(data: ResponseData) -> Self {
        Self::Ok { data }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error {
            message: msg.into(),
        }
    }

    pub fn pong() -> Self {
        Self::ok(ResponseData::Pong {
            message: "pong".into(),
        })
    }

}
