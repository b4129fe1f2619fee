//! Groupie Tracker web front-end
//!
//! HTML pages and a small JSON API, built with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Artist grid with filters
//! - `GET /artist/:id` - Artist details and concerts
//! - `GET /search?q=` - Search results
//! - `GET /map/:id` - Concert locations on a map
//!
//! ## API
//! - `GET /api/suggestions?q=` - Search-bar suggestions
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use groupie_tracker::api::{serve, ApiConfig, AppState};
//! use groupie_tracker::catalog::Catalog;
//! use groupie_tracker::query::{Geocoder, GeocoderConfig, QueryService};
//! use groupie_tracker::upstream::{ReqwestTransport, UpstreamClient, DEFAULT_BASE_URL};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = Arc::new(ReqwestTransport::new(None)?);
//!     let client = UpstreamClient::new(transport.clone(), DEFAULT_BASE_URL);
//!     let catalog = Arc::new(Catalog::new(client));
//!     let geocoder = Arc::new(Geocoder::new(transport, GeocoderConfig::default()));
//!     let queries = Arc::new(QueryService::new(catalog, geocoder));
//!
//!     let config = ApiConfig::default();
//!     serve(AppState::new(queries, config.clone()), &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::home::index))
        // Wildcards so that extra segments are rejected as a bad id
        .route("/artist/", get(routes::artist::missing_id))
        .route("/artist/*id", get(routes::artist::artist_page))
        .route("/search", get(routes::search::search_page))
        .route("/map/", get(routes::artist::missing_id))
        .route("/map/*id", get(routes::map::map_page))
        .route("/api/suggestions", get(routes::search::suggestions))
        .nest("/health", health_routes)
        .fallback(routes::home::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the web server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Groupie Tracker listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Groupie Tracker shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
