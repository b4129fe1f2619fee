//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (catalog snapshot is cached)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once a catalog snapshot has been published. Never
/// triggers a load itself.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.catalog.cached() {
        Some(_) => StatusCode::OK,
        None => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let cached = state.catalog.cached();

    let status = if cached.is_some() { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        catalog: state.catalog.state().as_str().to_string(),
        artists: cached.map(|snapshot| snapshot.artists.len()),
        geocoded_locations: state.queries.geocoder().cache_len(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
