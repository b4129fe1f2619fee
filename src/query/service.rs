//! Query facade used by the web layer

use std::sync::Arc;

use super::filter::{apply_filters, FilterParams};
use super::geo::{GeoLocation, Geocoder};
use super::search::{search_artists, suggestions, Suggestion};
use crate::catalog::{Catalog, CatalogResult};
use crate::upstream::{Artist, Relation};

/// Filter, search, suggestion and geocoding operations over the catalog
pub struct QueryService {
    catalog: Arc<Catalog>,
    geocoder: Arc<Geocoder>,
}

impl QueryService {
    pub fn new(catalog: Arc<Catalog>, geocoder: Arc<Geocoder>) -> Self {
        Self { catalog, geocoder }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn geocoder(&self) -> &Arc<Geocoder> {
        &self.geocoder
    }

    pub async fn filter(&self, params: &FilterParams) -> CatalogResult<Vec<Artist>> {
        let snapshot = self.catalog.snapshot().await?;
        Ok(apply_filters(&snapshot, params))
    }

    pub async fn search(&self, query: &str) -> CatalogResult<Vec<Artist>> {
        let snapshot = self.catalog.snapshot().await?;
        Ok(search_artists(&snapshot, query))
    }

    /// Search-bar suggestions; an empty query never loads the catalog
    pub async fn suggestions(&self, query: &str) -> CatalogResult<Vec<Suggestion>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let snapshot = self.catalog.snapshot().await?;
        Ok(suggestions(&snapshot, query))
    }

    /// Up to `limit` geocoded concert locations of a relation
    pub async fn geocode(&self, relation: &Relation, limit: usize) -> Vec<GeoLocation> {
        self.geocoder.geocode_relation(relation, limit).await
    }
}
