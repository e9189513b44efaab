//! Topocentric altitude/azimuth of the planets for an observer.

use log::debug;

use crate::api::{PlanetVisibility, PlanetsResponse};
use crate::ephemeris::{apparent_altaz, EphemerisError, EphemerisModel};
use crate::models::{Body, Instant, ObserverLocation};

/// Altitude, azimuth and visibility of the seven planets, in listing order.
///
/// The observer's latitude and longitude are echoed back as given.
pub fn compute_planets(
    instant: &Instant,
    location: &ObserverLocation,
    model: EphemerisModel,
) -> Result<PlanetsResponse, EphemerisError> {
    let planets = Body::PLANETS
        .iter()
        .map(|&body| {
            let horizontal = apparent_altaz(body, instant, location, model)?;
            Ok(PlanetVisibility {
                name: body.name().to_string(),
                alt: horizontal.altitude.value(),
                az: horizontal.azimuth.value(),
                visible: horizontal.is_above_horizon(),
            })
        })
        .collect::<Result<Vec<_>, EphemerisError>>()?;

    debug!(
        "Computed alt/az for {} planets at lat={} lon={} ({} visible)",
        planets.len(),
        location.latitude.value(),
        location.longitude.value(),
        planets.iter().filter(|p| p.visible).count()
    );

    Ok(PlanetsResponse {
        time_utc: instant.isot(),
        lat: location.latitude.value(),
        lon: location.longitude.value(),
        planets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn fixed_instant() -> Instant {
        Instant::from_datetime(Utc.with_ymd_and_hms(2025, 3, 1, 21, 0, 0).unwrap())
    }

    #[test]
    fn test_seven_planets_without_earth() {
        let response =
            compute_planets(&fixed_instant(), &ObserverLocation::default(), EphemerisModel::Vsop87)
                .unwrap();
        let names: Vec<&str> = response.planets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
    }

    #[test]
    fn test_default_location_equals_explicit_edinburgh() {
        let instant = fixed_instant();
        let defaulted =
            compute_planets(&instant, &ObserverLocation::default(), EphemerisModel::Vsop87).unwrap();
        let explicit = compute_planets(
            &instant,
            &ObserverLocation::from_lat_lon(55.9533, -3.1883),
            EphemerisModel::Vsop87,
        )
        .unwrap();
        assert_eq!(defaulted, explicit);
    }

    #[test]
    fn test_one_second_drift_is_tiny() {
        let a = fixed_instant();
        let b = Instant::from_datetime(a.utc() + Duration::seconds(1));
        let loc = ObserverLocation::default();
        let first = compute_planets(&a, &loc, EphemerisModel::Vsop87).unwrap();
        let second = compute_planets(&b, &loc, EphemerisModel::Vsop87).unwrap();
        for (p, q) in first.planets.iter().zip(&second.planets) {
            // Sidereal rotation is ~0.0042 deg/s.
            assert!((p.alt - q.alt).abs() < 0.01, "{} alt drift", p.name);
            let daz = (p.az - q.az).abs();
            let daz = daz.min(360.0 - daz);
            assert!(daz < 0.05 || p.alt.abs() > 89.0, "{} az drift {daz}", p.name);
        }
    }

    #[test]
    fn test_location_is_echoed_unvalidated() {
        let loc = ObserverLocation::from_lat_lon(200.0, -500.0);
        let response = compute_planets(&fixed_instant(), &loc, EphemerisModel::Vsop87).unwrap();
        assert_eq!(response.lat, 200.0);
        assert_eq!(response.lon, -500.0);
        assert_eq!(response.planets.len(), 7);
    }

    proptest! {
        #[test]
        fn angles_in_range_and_visibility_follows_altitude(
            lat in -90.0f64..=90.0,
            lon in -180.0f64..=180.0,
            offset_hours in 0i64..(24 * 365),
        ) {
            let instant = Instant::from_datetime(
                Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::hours(offset_hours),
            );
            let response = compute_planets(
                &instant,
                &ObserverLocation::from_lat_lon(lat, lon),
                EphemerisModel::Vsop87,
            )
            .unwrap();
            prop_assert_eq!(response.planets.len(), 7);
            for planet in &response.planets {
                prop_assert!((-90.0..=90.0).contains(&planet.alt));
                prop_assert!((0.0..360.0).contains(&planet.az));
                prop_assert_eq!(planet.visible, planet.alt > 0.0);
            }
        }
    }
}
