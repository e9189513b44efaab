//! Computation pipelines behind the HTTP endpoints.
//!
//! Each function takes the instant and ephemeris model explicitly, so the
//! same inputs always give the same response.

pub mod planets;
pub mod solar_system;

pub use planets::compute_planets;
pub use solar_system::compute_solar_system;
