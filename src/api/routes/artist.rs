//! Artist Routes
//!
//! - GET /artist/:id - Artist details and concerts
//! - GET /artist/ and /map/ - Missing id

use axum::{
    extract::{Path, State},
    response::Html,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::render;
use crate::api::state::AppState;

/// GET /artist/:id
pub async fn artist_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Html<String>> {
    let id = parse_artist_id(&id)?;

    let artist = state.catalog.artist_by_id(id).await?;
    let relation = state.catalog.relation_by_id(id).await?;

    Ok(Html(render::artist_page(&artist, &relation)))
}

/// An id path with nothing after the slash
pub async fn missing_id() -> ApiError {
    ApiError::BadRequest("Missing artist id".to_string())
}

/// Parse a path id; anything but a positive integer is a bad request
pub fn parse_artist_id(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(ApiError::BadRequest(format!("Invalid artist id: {}", raw))),
    }
}
