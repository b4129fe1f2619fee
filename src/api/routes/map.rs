//! Map Routes
//!
//! - GET /map/:id - Geocoded concert locations of an artist

use axum::{
    extract::{Path, State},
    response::Html,
};
use std::sync::Arc;

use super::artist::parse_artist_id;
use crate::api::error::ApiResult;
use crate::api::render;
use crate::api::state::AppState;

/// GET /map/:id
///
/// Unresolved locations are left off the map rather than failing the page.
pub async fn map_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Html<String>> {
    let id = parse_artist_id(&id)?;

    let artist = state.catalog.artist_by_id(id).await?;
    let relation = state.catalog.relation_by_id(id).await?;

    let locations = state
        .queries
        .geocode(&relation, state.config.map_location_limit)
        .await;

    tracing::debug!(
        artist_id = id,
        requested = relation.dates_locations.len(),
        resolved = locations.len(),
        "Geocoded concert locations"
    );

    Ok(Html(render::map_page(&artist, &locations)))
}
