//! Artist API client
//!
//! One GET + JSON decode per upstream resource. No retries; the caller
//! decides what a failure means.

use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

use super::error::{UpstreamError, UpstreamResult};
use super::models::{Artist, DateIndex, LocationIndex, RelationIndex};
use super::transport::HttpTransport;

/// Public artist API
pub const DEFAULT_BASE_URL: &str = "https://groupietrackers.herokuapp.com/api";

/// The four resources that make up a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Artists,
    Locations,
    Dates,
    Relations,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Artists,
        Resource::Locations,
        Resource::Dates,
        Resource::Relations,
    ];

    /// Path segment under the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Artists => "artists",
            Resource::Locations => "locations",
            Resource::Dates => "dates",
            Resource::Relations => "relation",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Artists => "artists",
            Resource::Locations => "locations",
            Resource::Dates => "dates",
            Resource::Relations => "relations",
        };
        f.write_str(name)
    }
}

/// Client for the artist API
#[derive(Clone)]
pub struct UpstreamClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a resource
    pub fn url(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    pub async fn artists(&self) -> UpstreamResult<Vec<Artist>> {
        self.fetch_json(&self.url(Resource::Artists)).await
    }

    pub async fn locations(&self) -> UpstreamResult<LocationIndex> {
        self.fetch_json(&self.url(Resource::Locations)).await
    }

    pub async fn dates(&self) -> UpstreamResult<DateIndex> {
        self.fetch_json(&self.url(Resource::Dates)).await
    }

    pub async fn relations(&self) -> UpstreamResult<RelationIndex> {
        self.fetch_json(&self.url(Resource::Relations)).await
    }

    /// GET `url`, require 200 and decode the body as `T`
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> UpstreamResult<T> {
        let response = self.transport.get(url, &[]).await?;

        if !response.is_ok() {
            return Err(UpstreamError::Fetch {
                status: response.status,
                body: response.body,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}
