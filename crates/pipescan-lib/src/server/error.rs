//! HTTP-facing errors
//!
//! Request bodies are validated by deserialization before the analyzer runs.
//! Rejections keep the extractor's status code and answer with a JSON body
//! of the form `{"detail": "..."}`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Errors returned by route handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(rejection) => rejection.status(),
        }
    }

    /// Client-facing description of the failure
    pub fn detail(&self) -> String {
        match self {
            ApiError::InvalidBody(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();

        warn!(status = status.as_u16(), detail = %detail, "Rejected request");

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
