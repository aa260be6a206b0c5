//! Print the sun's path over a range of days as JSON lines.
//!
//! Usage: sun_table [--config PATH] [--from YYYY-MM-DD] [--days N] [--steps K]

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Days, NaiveDate, SecondsFormat};
use serde::Serialize;

use sunpath::core::logging;
use sunpath::ephemeris::SpaSun;
use sunpath::sim::SimulatorConfig;
use sunpath::sun::{SimulationInput, SunMapper, DAY_FRACTION_SPAN};

/// One output line.
#[derive(Serialize)]
struct Row {
    date: NaiveDate,
    day_fraction: f64,
    instant: String,
    clock: String,
    azimuth: f64,
    altitude: f64,
    position: [f64; 3],
    intensity_on: bool,
}

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let config = match parse_str_arg(&args, "--config").map(PathBuf::from) {
        Some(path) => match SimulatorConfig::load_sync(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => SimulatorConfig::default(),
    };

    let from = match parse_str_arg(&args, "--from") {
        Some(s) => match s.parse::<NaiveDate>() {
            Ok(date) => date,
            Err(_) => {
                log::error!("Invalid date: {}", s);
                return ExitCode::FAILURE;
            }
        },
        None => config.sun.default_date,
    };
    let days = parse_u32_arg(&args, "--days").unwrap_or(1);
    let steps = parse_u32_arg(&args, "--steps").unwrap_or(12).max(1);

    let mapper = match SunMapper::new(&config.sun, SpaSun::default()) {
        Ok(mapper) => mapper,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!("Sun table: {} day(s) from {}, {} steps per day", days, from, steps);

    for day in 0..days {
        let Some(date) = from.checked_add_days(Days::new(u64::from(day))) else {
            log::error!("Date range overflows after {}", from);
            return ExitCode::FAILURE;
        };

        for i in 0..=steps {
            let day_fraction = DAY_FRACTION_SPAN * f64::from(i) / f64::from(steps);
            let report = match mapper.map(SimulationInput { date, day_fraction }) {
                Ok(report) => report,
                Err(e) => {
                    // Polar day or night: skip the rest of this date
                    log::warn!("{}", e);
                    break;
                }
            };

            let row = Row {
                date,
                day_fraction,
                instant: report.instant.to_rfc3339_opts(SecondsFormat::Millis, true),
                clock: report.clock_label,
                azimuth: report.sky.azimuth_degrees,
                altitude: report.sky.altitude_degrees,
                position: report.light.position.to_array(),
                intensity_on: report.light.intensity_on,
            };
            match serde_json::to_string(&row) {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    log::error!("Serialize error: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}
