//! Display labels for the simulated time.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Format an instant as zero-padded `HH:MM` wall-clock time in `tz`.
pub fn clock_label(instant: DateTime<Utc>, tz: &Tz) -> String {
    instant.with_timezone(tz).format("%H:%M").to_string()
}

/// Raw slider value as shown next to the slider: `6`, `6.5`, `11.25`.
pub fn hour_label(day_fraction: f64) -> String {
    format!("{day_fraction}")
}
