//! Catalog error types

use thiserror::Error;

use crate::upstream::{Resource, UpstreamError};

/// Errors returned by the loader and the lookup helpers.
///
/// `Clone` because one refresh outcome is shared by every waiting caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// One of the four upstream fetches failed; the refresh was discarded
    #[error("Failed to fetch {resource}: {source}")]
    Upstream {
        resource: Resource,
        #[source]
        source: UpstreamError,
    },

    #[error("Artist not found: {0}")]
    ArtistNotFound(i64),

    #[error("Relation not found: {0}")]
    RelationNotFound(i64),

    /// The refresh task died before reporting a result
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::ArtistNotFound(_) | CatalogError::RelationNotFound(_)
        )
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
