//! Planetary ephemeris backed by siderust.
//!
//! Barycentric states come from the VSOP87E series. Apparent altitude and
//! azimuth go through siderust's topocentric pipeline: diurnal parallax,
//! IAU 2006 precession, IAU 2000B nutation and apparent sidereal time. Light
//! time is applied here; aberration and refraction are not.
//!
//! The model is always passed explicitly so callers decide which ephemeris a
//! computation runs against.

use std::fmt;
use std::str::FromStr;

use qtty::Degrees;
use serde::{Deserialize, Serialize};
use siderust::bodies::solar_system as planets;
use siderust::coordinates::cartesian::{Position, Velocity};
use siderust::coordinates::centers::{Barycentric, Geocentric};
use siderust::coordinates::frames::{EclipticMeanJ2000, EquatorialMeanJ2000, ICRS};
use siderust::coordinates::transform::{Transform, TransformFrame};
use siderust::ephemeris::{AuPerDay, VSOP87};
use siderust::event::horizontal::{
    equatorial_to_horizontal, geocentric_j2000_to_apparent_topocentric,
};
use siderust::qtty::{AstronomicalUnit, Days};
use siderust::time::JulianDate;
use thiserror::Error;

use crate::coordinates::{normalize_azimuth, HorizontalPosition};
use crate::models::{Body, Instant, ObserverLocation};

/// Light travel time per astronomical unit, in days.
pub const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Barycentric position on ICRS axes, in AU.
pub type BarycentricPosition = Position<Barycentric, ICRS, AstronomicalUnit>;

/// Barycentric velocity on ICRS axes, in AU/day.
pub type BarycentricVelocity = Velocity<ICRS, AuPerDay>;

/// Errors raised while resolving or evaluating an ephemeris.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EphemerisError {
    #[error("Unknown ephemeris model '{0}'")]
    UnknownModel(String),

    #[error("Unknown solar system body '{0}'")]
    UnknownBody(String),

    #[error("Body {body} is not supported here: {reason}")]
    UnsupportedBody { body: Body, reason: String },

    #[error("Instant {utc} cannot be evaluated by the {model} ephemeris: {reason}")]
    OutOfRange {
        utc: String,
        model: EphemerisModel,
        reason: String,
    },
}

/// Available ephemeris models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EphemerisModel {
    /// VSOP87 analytic series shipped with siderust.
    #[default]
    Vsop87,
}

impl EphemerisModel {
    pub fn name(&self) -> &'static str {
        match self {
            EphemerisModel::Vsop87 => "vsop87",
        }
    }

    /// Terrestrial Time Julian Date the model is evaluated at.
    fn julian_date(&self, instant: &Instant) -> Result<JulianDate, EphemerisError> {
        instant
            .julian_date()
            .map_err(|e| EphemerisError::OutOfRange {
                utc: instant.isot(),
                model: *self,
                reason: e.to_string(),
            })
    }

    fn series(&self, body: Body) -> &'static dyn VSOP87 {
        match self {
            EphemerisModel::Vsop87 => match body {
                Body::Mercury => &planets::Mercury,
                Body::Venus => &planets::Venus,
                Body::Earth => &planets::Earth,
                Body::Mars => &planets::Mars,
                Body::Jupiter => &planets::Jupiter,
                Body::Saturn => &planets::Saturn,
                Body::Uranus => &planets::Uranus,
                Body::Neptune => &planets::Neptune,
            },
        }
    }

    /// Barycentric position and velocity on ecliptic J2000 axes.
    fn ecliptic_pos_vel(
        &self,
        body: Body,
        jd: JulianDate,
    ) -> (
        Position<Barycentric, EclipticMeanJ2000, AstronomicalUnit>,
        Velocity<EclipticMeanJ2000, AuPerDay>,
    ) {
        match self {
            EphemerisModel::Vsop87 => match body {
                Body::Mercury => planets::Mercury::vsop87e_pos_vel(jd),
                Body::Venus => planets::Venus::vsop87e_pos_vel(jd),
                Body::Earth => planets::Earth::vsop87e_pos_vel(jd),
                Body::Mars => planets::Mars::vsop87e_pos_vel(jd),
                Body::Jupiter => planets::Jupiter::vsop87e_pos_vel(jd),
                Body::Saturn => planets::Saturn::vsop87e_pos_vel(jd),
                Body::Uranus => planets::Uranus::vsop87e_pos_vel(jd),
                Body::Neptune => planets::Neptune::vsop87e_pos_vel(jd),
            },
        }
    }
}

impl fmt::Display for EphemerisModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EphemerisModel {
    type Err = EphemerisError;

    /// `builtin` is accepted as an alias for the model compiled into the binary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vsop87" | "builtin" => Ok(EphemerisModel::Vsop87),
            _ => Err(EphemerisError::UnknownModel(s.to_string())),
        }
    }
}

/// Position and velocity of a body relative to the solar system barycentre.
#[derive(Debug, Clone, Copy)]
pub struct StateVector {
    pub position: BarycentricPosition,
    pub velocity: BarycentricVelocity,
}

/// Barycentric state on ICRS axes.
pub fn barycentric_posvel(
    body: Body,
    instant: &Instant,
    model: EphemerisModel,
) -> Result<StateVector, EphemerisError> {
    let jd = model.julian_date(instant)?;
    let (position, velocity) = model.ecliptic_pos_vel(body, jd);
    Ok(StateVector {
        position: position.to_frame(),
        velocity: velocity.to_frame(),
    })
}

/// Apparent altitude/azimuth of a planet for an observer.
pub fn apparent_altaz(
    body: Body,
    instant: &Instant,
    location: &ObserverLocation,
    model: EphemerisModel,
) -> Result<HorizontalPosition, EphemerisError> {
    if body == Body::Earth {
        return Err(EphemerisError::UnsupportedBody {
            body,
            reason: "cannot observe Earth from its own surface".to_string(),
        });
    }

    let jd = model.julian_date(instant)?;
    let series = model.series(body);

    // Earth stays at `jd`; the planet is taken where it was when the light left.
    let geometric: Position<Geocentric, EquatorialMeanJ2000, AstronomicalUnit> =
        series.vsop87e(jd).transform(jd);
    let light_time = Days::new(geometric.distance().value() * LIGHT_TIME_DAYS_PER_AU);
    let geocentric: Position<Geocentric, EquatorialMeanJ2000, AstronomicalUnit> =
        series.vsop87e(jd - light_time).transform(jd);

    let site = location.geodetic();
    let topocentric = geocentric_j2000_to_apparent_topocentric(&geocentric, site, jd);
    let horizontal = equatorial_to_horizontal(&topocentric, site, jd);

    Ok(HorizontalPosition {
        altitude: Degrees::new(horizontal.alt().value()),
        azimuth: normalize_azimuth(Degrees::new(horizontal.az().value())),
    })
}
