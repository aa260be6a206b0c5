//! Simulator: ties the sun mapper to the temple scene and exposes it for control.

pub mod config;
pub mod control;
pub mod simulator;

pub use config::SimulatorConfig;
pub use simulator::{Labels, Simulator};
