//! Concert location geocoding
//!
//! Resolves location keys to coordinates through a Nominatim-compatible
//! search endpoint. Results are cached in memory by formatted label;
//! failures are not cached and the location is simply left off the map.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use thiserror::Error;

use super::format::format_location;
use crate::upstream::{HttpTransport, Relation, UpstreamError};

/// OpenStreetMap Nominatim search endpoint
pub const DEFAULT_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Nominatim rejects requests without an identifying User-Agent
pub const DEFAULT_USER_AGENT: &str = "Groupie-Tracker/1.0";

/// Per-request timeout for geocoding lookups
pub const DEFAULT_GEOCODE_TIMEOUT: Duration = Duration::from_secs(5);

/// Locations resolved for an artist map page
pub const MAP_LOCATION_LIMIT: usize = 5;

/// Locations resolved per artist when several artists share a map
pub const ARTIST_LOCATION_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A resolved concert location ready for a map marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLocation {
    /// Formatted label, e.g. `"Seattle, Washington, Usa"`
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub dates: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// The lookup returned no result for the address
    #[error("No geocoding result for {0}")]
    Unresolved(String),

    #[error("Geocoding request failed: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Invalid coordinate {value:?} for {address}")]
    InvalidCoordinate { address: String, value: String },
}

#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub endpoint: String,
    pub user_agent: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GEOCODE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

/// Address-to-coordinate lookup with an in-memory result cache
pub struct Geocoder {
    transport: Arc<dyn HttpTransport>,
    config: GeocoderConfig,
    cache: RwLock<HashMap<String, Coordinates>>,
}

impl Geocoder {
    pub fn new(transport: Arc<dyn HttpTransport>, config: GeocoderConfig) -> Self {
        Self {
            transport,
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &GeocoderConfig {
        &self.config
    }

    /// Cached coordinates for an address, if it was resolved before
    pub fn cached(&self, address: &str) -> Option<Coordinates> {
        self.cache
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(address)
            .copied()
    }

    /// Number of cached addresses
    pub fn cache_len(&self) -> usize {
        self.cache.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Resolve a formatted address to coordinates
    pub async fn geocode(&self, address: &str) -> Result<Coordinates, GeoError> {
        if let Some(coordinates) = self.cached(address) {
            return Ok(coordinates);
        }

        let url = format!(
            "{}?q={}&format=json&limit=1",
            self.config.endpoint,
            urlencoding::encode(address)
        );
        let response = self
            .transport
            .get(&url, &[("User-Agent", self.config.user_agent.as_str())])
            .await?;

        if !response.is_ok() {
            return Err(UpstreamError::Fetch {
                status: response.status,
                body: response.body,
            }
            .into());
        }

        let places: Vec<Place> = serde_json::from_str(&response.body).map_err(UpstreamError::from)?;
        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| GeoError::Unresolved(address.to_string()))?;

        let coordinates = Coordinates {
            latitude: parse_coordinate(address, &place.lat)?,
            longitude: parse_coordinate(address, &place.lon)?,
        };

        self.cache
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(address.to_string(), coordinates);

        Ok(coordinates)
    }

    /// Geocode up to `limit` locations of a relation, in key order.
    ///
    /// Locations that fail to resolve are skipped and do not count
    /// towards the limit.
    pub async fn geocode_relation(&self, relation: &Relation, limit: usize) -> Vec<GeoLocation> {
        self.resolve(relation, limit, None).await
    }

    /// Like [`geocode_relation`](Self::geocode_relation) with the per-artist
    /// limit, tagging each location with the artist's name
    pub async fn geocode_for_artist(
        &self,
        relation: &Relation,
        artist_name: &str,
    ) -> Vec<GeoLocation> {
        self.resolve(relation, ARTIST_LOCATION_LIMIT, Some(artist_name))
            .await
    }

    async fn resolve(
        &self,
        relation: &Relation,
        limit: usize,
        artist_name: Option<&str>,
    ) -> Vec<GeoLocation> {
        let mut resolved = Vec::new();

        for (key, dates) in &relation.dates_locations {
            if resolved.len() >= limit {
                break;
            }

            let name = format_location(key);
            match self.geocode(&name).await {
                Ok(coordinates) => resolved.push(GeoLocation {
                    name,
                    latitude: coordinates.latitude,
                    longitude: coordinates.longitude,
                    dates: dates.clone(),
                    artist_name: artist_name.map(str::to_string),
                }),
                Err(e) => {
                    tracing::debug!(location = %name, error = %e, "Skipping unresolved location");
                }
            }
        }

        resolved
    }
}

fn parse_coordinate(address: &str, value: &str) -> Result<f64, GeoError> {
    value
        .trim()
        .parse()
        .map_err(|_| GeoError::InvalidCoordinate {
            address: address.to_string(),
            value: value.to_string(),
        })
}
