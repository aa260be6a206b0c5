use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use sunpath::core::logging;
use sunpath::ephemeris::SpaSun;
use sunpath::sim::{Simulator, SimulatorConfig};
use sunpath::sun::{SunReport, DAY_FRACTION_SPAN};
use sunpath_control::ControlServer;

fn main() -> ExitCode {
    logging::init();
    log::info!("Sunpath starting...");

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let config_path = parse_path_arg(&args, "--config");
    let date = parse_str_arg(&args, "--date");
    let fraction = parse_f64_arg(&args, "--fraction");
    let sweep = parse_u32_arg(&args, "--sweep");
    let serve = parse_u16_arg(&args, "--serve");
    let write_config = parse_path_arg(&args, "--write-config");

    let config = match config_path {
        Some(ref path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => SimulatorConfig::default(),
    };

    if let Some(ref path) = write_config {
        if let Err(e) = config.save_sync(path) {
            log::error!("Failed to write config to {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
        log::info!("Config written to {}", path.display());
    }

    let mut sim = match Simulator::new(config, SpaSun::default()) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Failed to start simulator: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(date) = date {
        if let Err(e) = sim.set_date_str(&date) {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    }
    if let Some(fraction) = fraction {
        if let Err(e) = sim.set_day_fraction(fraction) {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    if let Some(port) = serve {
        return serve_forever(sim, port);
    }

    if let Some(steps) = sweep {
        return run_sweep(&mut sim, steps.max(1));
    }

    print_report(sim.report(), sim.on_intensity());
    let labels = sim.labels();
    println!("Labels: time={} hour={}", labels.time_label, labels.hour_label);
    ExitCode::SUCCESS
}

fn load_config(path: &Path) -> sunpath::core::Result<SimulatorConfig> {
    log::info!("Loading config from: {}", path.display());
    SimulatorConfig::load_sync(path)
}

fn print_report(report: &SunReport, on_intensity: f32) {
    let p = report.light.position;
    println!(
        "{} f={:>5.2}  {}  az={:>7.3}  alt={:>7.3}  light=({:>8.3}, {:>8.3}, {:>8.3})  intensity={}",
        report.input.date,
        report.input.day_fraction,
        report.clock_label,
        report.sky.azimuth_degrees,
        report.sky.altitude_degrees,
        p.x,
        p.y,
        p.z,
        report.light.intensity(on_intensity),
    );
}

/// Step the slider from sunrise to sunset in `steps` equal increments.
fn run_sweep(sim: &mut Simulator<SpaSun>, steps: u32) -> ExitCode {
    let on = sim.on_intensity();
    for i in 0..=steps {
        let fraction = DAY_FRACTION_SPAN * f64::from(i) / f64::from(steps);
        match sim.set_day_fraction(fraction) {
            Ok(report) => print_report(report, on),
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn serve_forever(sim: Simulator<SpaSun>, port: u16) -> ExitCode {
    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to create tokio runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    rt.block_on(async {
        let handler = Arc::new(tokio::sync::Mutex::new(sim));
        let server = match ControlServer::bind(handler, port).await {
            Ok(server) => server,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        };

        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for shutdown signal: {}", e);
        }
        log::info!("Shutting down control server on {}", server.local_addr());
        server.shutdown();
        ExitCode::SUCCESS
    })
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_path_arg(args: &[String], flag: &str) -> Option<PathBuf> {
    parse_str_arg(args, flag).map(PathBuf::from)
}

fn parse_f64_arg(args: &[String], flag: &str) -> Option<f64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u16_arg(args: &[String], flag: &str) -> Option<u16> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}
