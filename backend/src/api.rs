//! Public API surface for the planet tracker.
//!
//! This file consolidates the response DTOs for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};

/// Barycentric position of one body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub name: String,
    /// X coordinate in AU (equatorial J2000 axes)
    pub x: f64,
    /// Y coordinate in AU
    pub y: f64,
    /// Z coordinate in AU
    pub z: f64,
    /// Distance from the barycentre in AU
    pub r: f64,
}

/// Response of `GET /solar_system`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarSystemResponse {
    pub time_utc: String,
    pub bodies: Vec<BodyPosition>,
}

/// Topocentric position and visibility of one planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetVisibility {
    pub name: String,
    /// Altitude above the horizon in degrees
    pub alt: f64,
    /// Azimuth from North through East in degrees
    pub az: f64,
    pub visible: bool,
}

/// Response of `GET /planets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetsResponse {
    pub time_utc: String,
    pub lat: f64,
    pub lon: f64,
    pub planets: Vec<PlanetVisibility>,
}
