//! Home Routes
//!
//! - GET / - Artist grid, filtered when a query string is present
//! - fallback - 404 page for every unknown path

use axum::{
    extract::{Query, RawQuery, State},
    http::Uri,
    response::Html,
};
use std::sync::Arc;

use crate::api::dto::FilterQuery;
use crate::api::error::{ApiError, ApiResult};
use crate::api::render;
use crate::api::state::AppState;
use crate::query::FilterParams;

/// GET /
///
/// Without a query string every artist is listed. Otherwise the filter
/// parameters are parsed leniently and applied.
pub async fn index(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Html<String>> {
    let filtering = raw.as_deref().is_some_and(|q| !q.is_empty());

    let (artists, params) = if filtering {
        let params = FilterQuery::from_pairs(pairs).into_params();
        (state.queries.filter(&params).await?, params)
    } else {
        let artists = state.queries.filter(&FilterParams::widest()).await?;
        (artists, FilterParams::default())
    };

    tracing::debug!(filtering, count = artists.len(), "Rendering artist grid");

    Ok(Html(render::index_page(&artists, &params)))
}

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
