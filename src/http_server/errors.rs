//! HTTP API errors
//!
//! Two failure classes reach clients: a missing record (404 with a plain
//! message) and a rejected payload (400 with the structured violation
//! list). Everything else is a transport-level rejection handled by axum
//! itself.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::{FieldViolation, ValidationError};
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the movie endpoints
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Requested identifier is absent from the store
    #[error("Movie not found")]
    NotFound,

    /// Request body failed schema validation
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    ///
    /// Validation failures are 400 for create and update alike.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

/// Plain-message error body
#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

/// Structured validation error body
#[derive(Debug, Serialize)]
struct ViolationsBody {
    error: Vec<FieldViolation>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::NotFound => (
                status,
                Json(MessageBody {
                    message: "Movie not found".to_string(),
                }),
            )
                .into_response(),
            ApiError::Validation(err) => (
                status,
                Json(ViolationsBody {
                    error: err.violations,
                }),
            )
                .into_response(),
        }
    }
}
