//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::DEFAULT_TTL;
use crate::query::{
    DEFAULT_GEOCODE_TIMEOUT, DEFAULT_GEOCODE_URL, DEFAULT_USER_AGENT, MAP_LOCATION_LIMIT,
};
use crate::upstream::DEFAULT_BASE_URL;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub geocoding: GeocodingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Apply a `host:port` or `:port` listen address
    pub fn apply_addr(&mut self, addr: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: "addr".to_string(),
            value: addr.to_string(),
        };

        let (host, port) = addr.rsplit_once(':').ok_or_else(invalid)?;
        let port: u16 = port.parse().map_err(|_| invalid())?;

        if !host.is_empty() {
            self.host = host.to_string();
        }
        self.port = port;
        Ok(())
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Artist API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Freshness window of the cached snapshot
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,

    /// Optional per-request timeout; unset means no timeout
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_cache_ttl() -> u64 {
    DEFAULT_TTL.as_secs()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cache_ttl_secs: default_cache_ttl(),
            request_timeout_secs: None,
        }
    }
}

impl UpstreamConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Geocoding configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingConfig {
    #[serde(default = "default_geocode_url")]
    pub url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_geocode_timeout")]
    pub timeout_secs: u64,

    /// Locations geocoded for one artist map
    #[serde(default = "default_max_locations")]
    pub max_locations: usize,
}

fn default_geocode_url() -> String {
    DEFAULT_GEOCODE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_geocode_timeout() -> u64 {
    DEFAULT_GEOCODE_TIMEOUT.as_secs()
}

fn default_max_locations() -> usize {
    MAP_LOCATION_LIMIT
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            url: default_geocode_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_geocode_timeout(),
            max_locations: default_max_locations(),
        }
    }
}

impl GeocodingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("groupie-tracker").join("config.toml")),
            Some(PathBuf::from("/etc/groupie-tracker/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (the process environment in production)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = lookup("GROUPIE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }

        // Upstream overrides
        if let Some(url) = lookup("GROUPIE_API_BASE_URL") {
            self.upstream.base_url = url;
        }
        if let Some(ttl) = lookup("GROUPIE_CACHE_TTL_SECS").and_then(|t| t.parse().ok()) {
            self.upstream.cache_ttl_secs = ttl;
        }

        // Geocoding overrides
        if let Some(url) = lookup("GROUPIE_GEOCODE_URL") {
            self.geocoding.url = url;
        }

        // Logging overrides
        if let Some(level) = lookup("GROUPIE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("GROUPIE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Groupie Tracker Configuration
#
# Environment variables override these settings:
# - GROUPIE_HOST
# - PORT
# - GROUPIE_API_BASE_URL
# - GROUPIE_CACHE_TTL_SECS
# - GROUPIE_GEOCODE_URL
# - GROUPIE_LOG_LEVEL
# - GROUPIE_LOG_FORMAT

[server]
# Host to bind to
host = "0.0.0.0"

# Port to listen on
port = 8080

[upstream]
# Artist API base URL
base_url = "https://groupietrackers.herokuapp.com/api"

# How long a fetched snapshot is served before refreshing (seconds)
cache_ttl_secs = 1800

# Optional per-request timeout (seconds)
# request_timeout_secs = 30

[geocoding]
# Nominatim-compatible search endpoint
url = "https://nominatim.openstreetmap.org/search"

# User-Agent sent with every geocoding request
user_agent = "Groupie-Tracker/1.0"

# Per-request timeout (seconds)
timeout_secs = 5

# Concert locations placed on an artist map
max_locations = 5

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
