//! # Groupie Tracker
//!
//! A server-rendered front-end over the groupie-tracker artist API:
//! browse bands, filter and search them, and see their concerts on a map.
//!
//! ## Modules
//!
//! - [`upstream`]: Typed client for the four remote resources
//! - [`catalog`]: Single-flight, time-bounded snapshot cache and lookups
//! - [`query`]: Filters, search, suggestions and geocoding
//! - [`api`]: HTML pages and JSON endpoints with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use groupie_tracker::catalog::Catalog;
//! use groupie_tracker::upstream::{ReqwestTransport, UpstreamClient, DEFAULT_BASE_URL};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = Arc::new(ReqwestTransport::new(None)?);
//!     let catalog = Catalog::new(UpstreamClient::new(transport, DEFAULT_BASE_URL));
//!
//!     // First call loads all four resources; later calls hit the cache
//!     let queen = catalog.artist_by_id(1).await?;
//!     println!("{} formed in {}", queen.name, queen.creation_date);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod query;
pub mod upstream;

// Re-export top-level types for convenience
pub use upstream::{Artist, Relation, UpstreamClient, UpstreamError};

pub use catalog::{Catalog, CatalogError, CatalogResult, Snapshot};

pub use query::{FilterParams, Geocoder, QueryService, Suggestion};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::Config;
