//! Geographic observer location.

use serde::{Deserialize, Serialize};

/// A fixed point on the Earth's surface from which the sky is observed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    /// Geodetic latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
    /// Height above sea level in metres.
    pub elevation: f64,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }

    /// Jerusalem, the location the temple scene is modelled on.
    pub fn jerusalem() -> Self {
        Self::new(31.7781, 35.2355, 750.0)
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::jerusalem()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_jerusalem() {
        let obs = Observer::default();
        assert_eq!(obs.latitude, 31.7781);
        assert_eq!(obs.longitude, 35.2355);
        assert_eq!(obs.elevation, 750.0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let obs = Observer::new(51.5, -0.12, 11.0);
        let json = serde_json::to_string(&obs).unwrap();
        let back: Observer = serde_json::from_str(&json).unwrap();
        assert_eq!(obs, back);
    }
}
