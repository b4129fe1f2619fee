//! API Error Types
//!
//! Defines error types for the web layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::catalog::CatalogError;

/// Web layer error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed path or query parameter
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route or resource for the request
    #[error("Not found: {0}")]
    NotFound(String),

    /// Catalog load or lookup failure
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Catalog(CatalogError::ArtistNotFound(_)) => StatusCode::NOT_FOUND,
            // An artist without a relation is an upstream inconsistency
            ApiError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Plain-text body shown for an error status
pub fn error_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::NOT_FOUND => "404 - Page Not Found",
        StatusCode::BAD_REQUEST => "400 - Bad Request",
        StatusCode::INTERNAL_SERVER_ERROR => "500 - Internal Server Error",
        _ => "Error",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                status = status.as_u16(),
                error_message = %self,
                "Request failed"
            );
        } else {
            tracing::debug!(
                request_id = %request_id,
                status = status.as_u16(),
                error_message = %self,
                "Request rejected"
            );
        }

        (status, error_message(status)).into_response()
    }
}

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;
