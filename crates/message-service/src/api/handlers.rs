//! HTTP request handlers.

use super::types::{GenerateMessageRequest, GenerateMessageResponse, HealthResponse};
use super::AppState;
use crate::error::MessageServiceError;
use axum::{body::Bytes, extract::State, Json};
use tracing::info;

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.generator.model().to_string(),
    })
}

/// Generate a welcome message for the supplied name.
///
/// The body is read as JSON whatever its `Content-Type`.
pub async fn generate_message(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateMessageResponse>, MessageServiceError> {
    let request = GenerateMessageRequest::from_body(&body)?;
    info!(name = %request.name, "Welcome message requested");

    let message = state.generator.generate_message(&request.name).await?;

    Ok(Json(GenerateMessageResponse { message }))
}
