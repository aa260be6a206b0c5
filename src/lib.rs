//! Sunpath - astronomical sun-position simulator for a static temple scene

pub mod core;
pub mod ephemeris;
pub mod sun;
pub mod scene;
pub mod sim;
