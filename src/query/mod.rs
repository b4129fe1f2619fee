//! Query Services
//!
//! Stateless operations over a catalog snapshot:
//!
//! - **filter**: range and location filters
//! - **search**: free-text search and typed suggestions
//! - **geo**: concert location geocoding with a result cache
//! - **format**: display labels for locations and dates

pub mod filter;
pub mod format;
pub mod geo;
pub mod search;
mod service;

pub use filter::{apply_filters, extract_year, FilterParams};
pub use format::{format_date, format_location};
pub use geo::{
    Coordinates, GeoError, GeoLocation, Geocoder, GeocoderConfig, ARTIST_LOCATION_LIMIT,
    DEFAULT_GEOCODE_TIMEOUT, DEFAULT_GEOCODE_URL, DEFAULT_USER_AGENT, MAP_LOCATION_LIMIT,
};
pub use search::{search_artists, suggestions, Suggestion, SuggestionKind, MAX_SUGGESTIONS};
pub use service::QueryService;
