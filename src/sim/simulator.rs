//! Interactive simulator: user inputs in, scene light out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::ephemeris::SolarEphemeris;
use crate::scene::TempleScene;
use crate::sun::{hour_label, LightSink, SimulationInput, SunMapper, SunReport};

use super::config::SimulatorConfig;

/// The two text labels next to the inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    /// Clock time of the derived instant, `HH:MM`.
    pub time_label: String,
    /// Raw slider value.
    pub hour_label: String,
}

/// Owns the scene and recomputes the sun light whenever an input changes.
///
/// `input()` and `report()` always describe the same recomputation; a failed
/// update leaves both, and the scene light, as they were.
pub struct Simulator<E> {
    mapper: SunMapper<E>,
    scene: TempleScene,
    on_intensity: f32,
    input: SimulationInput,
    report: SunReport,
}

impl<E: SolarEphemeris> Simulator<E> {
    /// Build the scene and place the sun for the configured defaults.
    ///
    /// Fails if the configuration is invalid or the startup position cannot
    /// be computed (polar day or night at the default date).
    pub fn new(config: SimulatorConfig, ephemeris: E) -> Result<Self> {
        let mapper = SunMapper::new(&config.sun, ephemeris)?;
        let input = SimulationInput {
            date: config.sun.default_date,
            day_fraction: config.sun.default_day_fraction,
        };
        let report = mapper.map(input)?;

        let mut scene = TempleScene::new(config.scene);
        scene.apply_light(&report.light, config.sun.on_intensity);

        Ok(Self {
            mapper,
            scene,
            on_intensity: config.sun.on_intensity,
            input,
            report,
        })
    }

    /// Select a calendar date and recompute.
    pub fn set_date(&mut self, date: NaiveDate) -> Result<&SunReport> {
        log::info!("Date set to {}", date);
        self.recompute(SimulationInput {
            date,
            ..self.input
        })
    }

    /// Select a calendar date from `YYYY-MM-DD` and recompute.
    pub fn set_date_str(&mut self, date: &str) -> Result<&SunReport> {
        let date: NaiveDate = date
            .trim()
            .parse()
            .map_err(|_| Error::InvalidDate(date.to_string()))?;
        self.set_date(date)
    }

    /// Move the day slider and recompute.
    pub fn set_day_fraction(&mut self, day_fraction: f64) -> Result<&SunReport> {
        log::info!("Day fraction set to {}", day_fraction);
        self.recompute(SimulationInput {
            day_fraction,
            ..self.input
        })
    }

    /// Map `input`, push the light into the scene, and commit the input.
    fn recompute(&mut self, input: SimulationInput) -> Result<&SunReport> {
        let report = match self.mapper.map(input) {
            Ok(report) => report,
            Err(e) => {
                log::warn!("Sun position for {:?} failed: {}", input, e);
                return Err(e);
            }
        };
        self.scene.apply_light(&report.light, self.on_intensity);
        self.input = input;
        self.report = report;
        Ok(&self.report)
    }

    pub fn labels(&self) -> Labels {
        Labels {
            time_label: self.report.clock_label.clone(),
            hour_label: hour_label(self.input.day_fraction),
        }
    }

    /// Last committed input.
    pub fn input(&self) -> SimulationInput {
        self.input
    }

    /// Result of the last successful recomputation.
    pub fn report(&self) -> &SunReport {
        &self.report
    }

    pub fn on_intensity(&self) -> f32 {
        self.on_intensity
    }

    pub fn scene(&self) -> &TempleScene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut TempleScene {
        &mut self.scene
    }
}
