//! Barycentric positions of the solar system bodies.

use log::debug;

use crate::api::{BodyPosition, SolarSystemResponse};
use crate::ephemeris::{barycentric_posvel, EphemerisError, EphemerisModel};
use crate::models::{Body, Instant};

/// Barycentric positions of all eight bodies, in listing order.
///
/// Fails as a whole if any body cannot be computed.
pub fn compute_solar_system(
    instant: &Instant,
    model: EphemerisModel,
) -> Result<SolarSystemResponse, EphemerisError> {
    let bodies = Body::SOLAR_SYSTEM_BODIES
        .iter()
        .map(|&body| {
            let state = barycentric_posvel(body, instant, model)?;
            let p = state.position;
            Ok(BodyPosition {
                name: body.name().to_string(),
                x: p.x().value(),
                y: p.y().value(),
                z: p.z().value(),
                r: p.distance().value(),
            })
        })
        .collect::<Result<Vec<_>, EphemerisError>>()?;

    debug!(
        "Computed {} barycentric positions at {} ({} ephemeris)",
        bodies.len(),
        instant.isot(),
        model
    );

    Ok(SolarSystemResponse {
        time_utc: instant.isot(),
        bodies,
    })
}
