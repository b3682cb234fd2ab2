//! Geographic observer location.

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Observer location on Earth (degrees, east longitude positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Seoul, the reference city used when no location is supplied.
    pub const SEOUL: GeoLocation = GeoLocation {
        latitude_deg: 37.5665,
        longitude_deg: 126.9780,
    };

    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Checks latitude in [-90, 90] and longitude in [-180, 180].
    pub fn validate(&self) -> Result<(), TimeError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(TimeError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(TimeError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(())
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self::SEOUL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_seoul() {
        assert_eq!(GeoLocation::default(), GeoLocation::SEOUL);
        assert!(GeoLocation::SEOUL.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(GeoLocation::new(91.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, -180.5).validate().is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).validate().is_err());
    }
}
