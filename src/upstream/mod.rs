//! Remote Data Fetcher
//!
//! Typed access to the read-only artist API.
//!
//! ## Resources
//!
//! - `GET /artists` - array of [`Artist`]
//! - `GET /locations` - `{"index": [Location]}`
//! - `GET /dates` - `{"index": [Date]}`
//! - `GET /relation` - `{"index": [Relation]}`
//!
//! All requests go through an [`HttpTransport`]; production code uses
//! [`ReqwestTransport`].

mod client;
mod error;
mod models;
mod transport;

#[cfg(test)]
pub(crate) mod fixtures;

#[cfg(test)]
pub(crate) use transport::fake;

pub use client::{Resource, UpstreamClient, DEFAULT_BASE_URL};
pub use error::{UpstreamError, UpstreamResult};
pub use models::{Artist, Date, DateIndex, Location, LocationIndex, Relation, RelationIndex};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
