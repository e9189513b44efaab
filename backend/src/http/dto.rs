//! Data Transfer Objects for the HTTP API.
//!
//! Response bodies live in [`crate::api`]; this module holds query
//! parameters and the operational responses.

use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::models::{ObserverLocation, DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG};

pub use crate::api::{BodyPosition, PlanetVisibility, PlanetsResponse, SolarSystemResponse};

/// Query parameters for the planets endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct PlanetsQuery {
    /// Observer latitude in degrees (default: Edinburgh)
    #[serde(default)]
    pub lat: Option<f64>,
    /// Observer longitude in degrees, East-positive (default: Edinburgh)
    #[serde(default)]
    pub lon: Option<f64>,
}

impl PlanetsQuery {
    /// Observer location with missing coordinates filled from the defaults.
    ///
    /// `NaN` and `inf` parse as floats but have no position on the sky, so
    /// they are rejected. Finite values are not range-checked.
    pub fn location(&self) -> Result<ObserverLocation, AppError> {
        let lat = finite("lat", self.lat.unwrap_or(DEFAULT_LATITUDE_DEG))?;
        let lon = finite("lon", self.lon.unwrap_or(DEFAULT_LONGITUDE_DEG))?;
        Ok(ObserverLocation::from_lat_lon(lat, lon))
    }
}

fn finite(name: &str, value: f64) -> Result<f64, AppError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::Validation(format!(
            "{}: expected a finite number, got {}",
            name, value
        )))
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
    /// Ephemeris model in use
    pub ephemeris: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_defaults_to_edinburgh() {
        assert_eq!(PlanetsQuery::default().location().unwrap(), ObserverLocation::default());
    }

    #[test]
    fn test_partial_query_keeps_other_default() {
        let q = PlanetsQuery {
            lat: Some(48.8566),
            lon: None,
        };
        let loc = q.location().unwrap();
        assert_eq!(loc.latitude.value(), 48.8566);
        assert_eq!(loc.longitude.value(), DEFAULT_LONGITUDE_DEG);
    }

    #[test]
    fn test_non_finite_coordinates_are_rejected() {
        for (lat, lon) in [
            (Some(f64::NAN), None),
            (Some(f64::INFINITY), None),
            (None, Some(f64::NEG_INFINITY)),
        ] {
            let err = PlanetsQuery { lat, lon }.location().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{lat:?} {lon:?}");
        }
    }

    #[test]
    fn test_out_of_range_but_finite_is_accepted() {
        let q = PlanetsQuery {
            lat: Some(200.0),
            lon: Some(-500.0),
        };
        assert_eq!(q.location().unwrap().latitude.value(), 200.0);
    }
}
