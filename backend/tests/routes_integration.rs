#![cfg(feature = "http-server")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use planet_tracker::ephemeris::EphemerisModel;
use planet_tracker::http::{create_router, AppState};

async fn get(uri: &str) -> (StatusCode, Value) {
    let app = create_router(AppState::new(EphemerisModel::Vsop87));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["ephemeris"], "vsop87");
}

#[tokio::test]
async fn test_solar_system_shape() {
    let (status, body) = get("/solar_system").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["time_utc"].as_str().unwrap().contains('T'));

    let bodies = body["bodies"].as_array().unwrap();
    assert_eq!(bodies.len(), 8);
    assert_eq!(bodies[2]["name"], "Earth");
    for b in bodies {
        let (x, y, z, r) = (
            b["x"].as_f64().unwrap(),
            b["y"].as_f64().unwrap(),
            b["z"].as_f64().unwrap(),
            b["r"].as_f64().unwrap(),
        );
        assert!(((x * x + y * y + z * z).sqrt() - r).abs() < 1e-9);
    }
}

#[tokio::test]
async fn test_planets_defaults_to_edinburgh() {
    let (status, body) = get("/planets").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lat"], 55.9533);
    assert_eq!(body["lon"], -3.1883);

    let planets = body["planets"].as_array().unwrap();
    let names: Vec<&str> = planets.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec!["Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
    );
}

#[tokio::test]
async fn test_planets_with_explicit_location() {
    let (status, body) = get("/planets?lat=-41.2865&lon=174.7762").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lat"], -41.2865);
    assert_eq!(body["lon"], 174.7762);

    for p in body["planets"].as_array().unwrap() {
        let alt = p["alt"].as_f64().unwrap();
        let az = p["az"].as_f64().unwrap();
        assert!((-90.0..=90.0).contains(&alt));
        assert!((0.0..360.0).contains(&az));
        assert_eq!(p["visible"].as_bool().unwrap(), alt > 0.0);
    }
}

#[tokio::test]
async fn test_planets_only_lat_given() {
    let (status, body) = get("/planets?lat=48.8566").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lat"], 48.8566);
    assert_eq!(body["lon"], -3.1883);
}

#[tokio::test]
async fn test_planets_out_of_range_coordinates_pass_through() {
    let (status, body) = get("/planets?lat=123.5&lon=-400").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lat"], 123.5);
    assert_eq!(body["planets"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_planets_malformed_lat_is_validation_error() {
    let (status, body) = get("/planets?lat=north&lon=0").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_planets_non_finite_coordinates_are_validation_errors() {
    for uri in ["/planets?lat=NaN", "/planets?lat=inf&lon=0", "/planets?lon=-infinity"] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert_eq!(body["code"], "VALIDATION_ERROR", "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, body) = get("/moons").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = create_router(AppState::default());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/solar_system")
                .header("origin", "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
