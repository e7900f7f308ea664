/// HTTP-facing error taxonomy
///
/// Every handler returns `Result<_, ApiError>`; the variant picks the status
/// code and the JSON body `{ "error": kind, "message": text }`.

use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request field
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Request body over the extractor's size limit
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Backing store unreachable or write failed
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::NotFound(_) => "not_found",
            ApiError::PayloadTooLarge(_) => "payload_too_large",
            ApiError::StorageUnavailable(_) => "storage_unavailable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::StorageUnavailable(e) => {
                // Cause stays in the logs
                tracing::error!("❌ Store failure: {}", e);
                "The data store is currently unavailable. Please try again later.".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({ "error": self.kind(), "message": message }));
        (self.status(), body).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
