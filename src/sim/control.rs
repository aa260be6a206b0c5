//! Remote control of a [`Simulator`] through `sunpath-control`.

use chrono::SecondsFormat;
use sunpath_control::{ControlCommand, ControlHandler, ControlResponse, ResponseData};

use crate::ephemeris::SolarEphemeris;
use crate::sun::SunReport;

use super::simulator::Simulator;

fn light_state_data(report: &SunReport, on_intensity: f32) -> ResponseData {
    ResponseData::LightState {
        date: report.input.date.to_string(),
        day_fraction: report.input.day_fraction,
        instant: report.instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        azimuth_degrees: report.sky.azimuth_degrees,
        altitude_degrees: report.sky.altitude_degrees,
        position: report.light.position.to_array(),
        intensity_on: report.light.intensity_on,
        intensity: report.light.intensity(on_intensity),
        time_label: report.clock_label.clone(),
    }
}

impl<E: SolarEphemeris + Send + 'static> ControlHandler for Simulator<E> {
    fn handle_command(&mut self, cmd: ControlCommand) -> ControlResponse {
        let on = self.on_intensity();
        match cmd {
            ControlCommand::SetDate { date } => match self.set_date_str(&date) {
                Ok(report) => ControlResponse::ok(light_state_data(report, on)),
                Err(e) => ControlResponse::error(e.to_string()),
            },
            ControlCommand::SetDayFraction { value } => match self.set_day_fraction(value) {
                Ok(report) => ControlResponse::ok(light_state_data(report, on)),
                Err(e) => ControlResponse::error(e.to_string()),
            },
            ControlCommand::GetLightState => {
                ControlResponse::ok(light_state_data(self.report(), on))
            }
            ControlCommand::GetLabels => {
                let labels = self.labels();
                ControlResponse::ok(ResponseData::Labels {
                    time_label: labels.time_label,
                    hour_label: labels.hour_label,
                })
            }
            ControlCommand::GetSceneInfo => {
                let info = self.scene_mut().info();
                ControlResponse::ok(ResponseData::SceneInfo {
                    node_count: info.node_count as u32,
                    mesh_count: info.mesh_count as u32,
                    light_count: info.light_count as u32,
                    shadow_casters: info.shadow_casters as u32,
                    sky_color: info.sky_color,
                    camera_position: info.camera.position.to_array(),
                    camera_fov_degrees: info.camera.fov_degrees,
                })
            }
            ControlCommand::Ping => ControlResponse::pong(),
        }
    }
}
