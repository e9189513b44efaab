//! Observer location on the Earth's surface.

use qtty::{Degrees, Meters};
use serde::{Deserialize, Serialize};
use siderust::coordinates::centers::Geodetic;
use siderust::coordinates::frames::ECEF;

/// Default observer latitude in degrees (Edinburgh).
pub const DEFAULT_LATITUDE_DEG: f64 = 55.9533;
/// Default observer longitude in degrees, East-positive (Edinburgh).
pub const DEFAULT_LONGITUDE_DEG: f64 = -3.1883;
/// Default observer height above the WGS84 ellipsoid in meters.
pub const DEFAULT_HEIGHT_M: f64 = 50.0;

/// Geodetic observer location.
///
/// Values are not range-checked here: latitudes outside [-90, 90] or
/// longitudes outside [-180, 180] are kept as given and only wrapped onto the
/// ellipsoid when the site is handed to siderust.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverLocation {
    /// Geodetic latitude, North-positive
    pub latitude: Degrees,
    /// Longitude, East-positive
    pub longitude: Degrees,
    /// Height above the ellipsoid
    pub height: Meters,
}

impl ObserverLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, height_m: f64) -> Self {
        Self {
            latitude: Degrees::new(latitude_deg),
            longitude: Degrees::new(longitude_deg),
            height: Meters::new(height_m),
        }
    }

    /// Location at the default observer height.
    pub fn from_lat_lon(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self::new(latitude_deg, longitude_deg, DEFAULT_HEIGHT_M)
    }

    /// WGS84 geodetic site used by siderust's topocentric transforms.
    pub fn geodetic(&self) -> Geodetic<ECEF> {
        Geodetic::<ECEF>::new(
            siderust::qtty::Degrees::new(self.longitude.value()),
            siderust::qtty::Degrees::new(self.latitude.value()),
            siderust::qtty::Quantity::<siderust::qtty::Meter>::new(self.height.value()),
        )
    }
}

impl Default for ObserverLocation {
    fn default() -> Self {
        Self::new(DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG, DEFAULT_HEIGHT_M)
    }
}
