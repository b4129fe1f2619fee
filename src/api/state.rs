//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::query::{QueryService, MAP_LOCATION_LIMIT};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Cached artist catalog
    pub catalog: Arc<Catalog>,
    /// Filter, search and geocoding operations
    pub queries: Arc<QueryService>,
    /// Server configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(queries: Arc<QueryService>, config: ApiConfig) -> Self {
        Self {
            catalog: Arc::clone(queries.catalog()),
            queries,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// Web server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Locations geocoded for the map page
    pub map_location_limit: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            map_location_limit: MAP_LOCATION_LIMIT,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            map_location_limit: config.geocoding.max_locations,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.server.port = 9090;
        config.geocoding.max_locations = 2;

        let api = ApiConfig::from_config(&config);
        assert_eq!(api.addr(), "0.0.0.0:9090");
        assert_eq!(api.map_location_limit, 2);
    }

    #[test]
    fn test_new_keeps_defaults() {
        let api = ApiConfig::new("127.0.0.1", 3000);
        assert_eq!(api.addr(), "127.0.0.1:3000");
        assert_eq!(api.map_location_limit, MAP_LOCATION_LIMIT);
    }
}
