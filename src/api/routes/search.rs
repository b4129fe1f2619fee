//! Search Routes
//!
//! - GET /search?q= - Search results page
//! - GET /api/suggestions?q= - Typed suggestions as JSON

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::api::dto::SearchQuery;
use crate::api::error::ApiResult;
use crate::api::render;
use crate::api::state::AppState;
use crate::query::Suggestion;

/// GET /search
pub async fn search_page(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Html<String>> {
    let query = SearchQuery::from_pairs(pairs);
    let text = query.text();
    if text.is_empty() {
        return Ok(Html(render::search_page("", None)));
    }

    let results = state.queries.search(text).await?;
    tracing::debug!(query = %text, count = results.len(), "Search completed");

    Ok(Html(render::search_page(text, Some(&results))))
}

/// GET /api/suggestions
pub async fn suggestions(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Suggestion>>> {
    let query = SearchQuery::from_pairs(pairs);
    let found = state.queries.suggestions(query.text()).await?;
    Ok(Json(found))
}
