//! Point lookups over the current snapshot

use super::error::{CatalogError, CatalogResult};
use super::loader::{Catalog, Snapshot};
use crate::upstream::{Artist, Relation};

impl Snapshot {
    pub fn artist(&self, id: i64) -> Option<&Artist> {
        self.artists.iter().find(|artist| artist.id == id)
    }

    pub fn relation(&self, id: i64) -> Option<&Relation> {
        self.relations.index.iter().find(|relation| relation.id == id)
    }
}

impl Catalog {
    /// Artist with the given id from the current snapshot
    pub async fn artist_by_id(&self, id: i64) -> CatalogResult<Artist> {
        let snapshot = self.snapshot().await?;
        snapshot
            .artist(id)
            .cloned()
            .ok_or(CatalogError::ArtistNotFound(id))
    }

    /// Relation (concert locations and dates) for the given artist id
    pub async fn relation_by_id(&self, id: i64) -> CatalogResult<Relation> {
        let snapshot = self.snapshot().await?;
        snapshot
            .relation(id)
            .cloned()
            .ok_or(CatalogError::RelationNotFound(id))
    }
}
