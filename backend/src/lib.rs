//! # Planet Tracker
//!
//! Read-only HTTP service computing where the planets are right now.
//!
//! Two endpoints feed a front-end visualisation:
//!
//! - `GET /solar_system`: barycentric Cartesian positions (AU) of the eight
//!   major bodies
//! - `GET /planets?lat=&lon=`: topocentric altitude/azimuth of the seven
//!   other planets for an observer, plus a visibility flag
//!
//! ## Architecture
//!
//! - [`models`]: instants, observer locations, the body enumeration
//! - [`coordinates`]: local horizon coordinates
//! - [`ephemeris`]: planetary positions from siderust's VSOP87 series
//! - [`services`]: the computation pipelines behind each endpoint
//! - [`api`]: response DTOs
//! - [`config`]: server configuration
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod config;
pub mod coordinates;
pub mod ephemeris;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
