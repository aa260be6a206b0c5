//! Error types for the sun simulator

use chrono::NaiveDate;
use thiserror::Error;

use crate::ephemeris::RiseSetDirection;

/// Main error type for the simulator
#[derive(Debug, Error)]
pub enum Error {
    /// No sunrise or sunset within the search horizon (polar day or night).
    #[error("No sun {direction} found within the search horizon starting {date}")]
    EventNotFound {
        direction: RiseSetDirection,
        date: NaiveDate,
    },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid day fraction: {0}")]
    InvalidDayFraction(f64),

    #[error("Derived instant is outside the representable time range")]
    InstantOutOfRange,

    #[error("Ephemeris error: {0}")]
    Ephemeris(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
