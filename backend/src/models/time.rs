use chrono::{DateTime, Utc};
use siderust::time::{ConversionError, JulianDate};

/// A single moment in time, captured once per request.
///
/// Keeps the timezone-aware UTC timestamp as the source of truth and derives
/// the Terrestrial Time Julian Date the ephemeris needs from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant {
    utc: DateTime<Utc>,
}

impl Instant {
    /// Capture the current UTC time.
    pub fn now() -> Self {
        Self { utc: Utc::now() }
    }

    pub fn from_datetime(utc: DateTime<Utc>) -> Self {
        Self { utc }
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    /// Julian Date on the Terrestrial Time scale.
    ///
    /// Leap seconds come from siderust's UTC history, so instants before
    /// 1961 (when UTC was first defined) are rejected.
    pub fn julian_date(&self) -> Result<JulianDate, ConversionError> {
        JulianDate::try_from_chrono(self.utc)
    }

    /// ISO 8601 rendering with millisecond precision and no zone suffix,
    /// e.g. `2024-03-20T03:06:00.000`.
    pub fn isot(&self) -> String {
        self.utc.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(utc: DateTime<Utc>) -> Self {
        Self::from_datetime(utc)
    }
}
