//! HTTP handlers for the REST API.
//!
//! Each handler captures the current instant once and delegates the
//! computation to the service layer on the blocking pool.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::Uri,
    Json,
};
use tracing::debug;

use super::dto::{HealthResponse, PlanetsQuery, PlanetsResponse, SolarSystemResponse};
use super::error::AppError;
use super::state::AppState;
use crate::models::Instant;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Liveness probe reporting the configured ephemeris.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ephemeris: state.ephemeris.to_string(),
    }))
}

// =============================================================================
// Positions
// =============================================================================

/// GET /solar_system
///
/// Barycentric positions (AU) of the eight bodies at the current instant.
pub async fn get_solar_system(State(state): State<AppState>) -> HandlerResult<SolarSystemResponse> {
    let instant = Instant::now();
    let model = state.ephemeris;

    let data = tokio::task::spawn_blocking(move || {
        services::compute_solar_system(&instant, model)
    })
    .await??;

    Ok(Json(data))
}

/// GET /planets?lat=&lon=
///
/// Altitude/azimuth and visibility of the seven planets for an observer.
/// Missing coordinates default to Edinburgh; malformed or non-finite ones
/// are rejected.
pub async fn get_planets(
    State(state): State<AppState>,
    query: Result<Query<PlanetsQuery>, QueryRejection>,
) -> HandlerResult<PlanetsResponse> {
    let Query(query) = query?;
    let location = query.location()?;
    let instant = Instant::now();
    let model = state.ephemeris;

    debug!(
        lat = location.latitude.value(),
        lon = location.longitude.value(),
        "computing planet visibility"
    );

    let data = tokio::task::spawn_blocking(move || {
        services::compute_planets(&instant, &location, model)
    })
    .await??;

    Ok(Json(data))
}

// =============================================================================
// Fallback
// =============================================================================

/// Any unknown route.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
