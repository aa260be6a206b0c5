//! Astronomical sun placement for the scene.
//!
//! [`SunMapper`] turns a date and a slider position into a [`LightState`];
//! applying that state to a live scene is left to a [`LightSink`].

pub mod clock;
pub mod config;
pub mod light;
pub mod mapper;

pub use clock::{clock_label, hour_label};
pub use config::SunConfig;
pub use light::{LightSink, LightState, SkyDirection, AZIMUTH_OFFSET_DEGREES};
pub use mapper::{SimulationInput, SunEvent, SunMapper, SunReport, DAY_FRACTION_SPAN};
pub use crate::ephemeris::Observer;
