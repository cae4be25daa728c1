//! Error types for the message service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Message service error types.
///
/// Upstream failures are deliberately collapsed into `GenerationFailed`;
/// callers only ever see the generic message.
#[derive(Debug, Error)]
pub enum MessageServiceError {
    #[error("Failed to generate message")]
    GenerationFailed,

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for MessageServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            MessageServiceError::GenerationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            MessageServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<llm_client::LlmError> for MessageServiceError {
    fn from(_: llm_client::LlmError) -> Self {
        MessageServiceError::GenerationFailed
    }
}

impl From<serde_json::Error> for MessageServiceError {
    fn from(e: serde_json::Error) -> Self {
        MessageServiceError::InvalidRequest(e.to_string())
    }
}
