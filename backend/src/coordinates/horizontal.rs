use qtty::Degrees;
use serde::{Deserialize, Serialize};

/// Position in the observer's local horizon frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalPosition {
    /// Angle above the horizon, [-90, 90]
    pub altitude: Degrees,
    /// Compass bearing from North through East, [0, 360)
    pub azimuth: Degrees,
}

impl HorizontalPosition {
    /// Above the horizon; an altitude of exactly zero does not count.
    pub fn is_above_horizon(&self) -> bool {
        self.altitude.value() > 0.0
    }
}

/// Normalise an azimuth into [0, 360).
///
/// `rem_euclid` can round tiny negative inputs up to exactly 360.
pub fn normalize_azimuth(az: Degrees) -> Degrees {
    let wrapped = az.value().rem_euclid(360.0);
    if wrapped >= 360.0 {
        Degrees::new(0.0)
    } else {
        Degrees::new(wrapped)
    }
}
