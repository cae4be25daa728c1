//! Shared HTTP plumbing for the service clients.

use crate::error::ServiceError;
use crate::types::ErrorBody;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

pub(crate) fn build_client(timeout: Duration) -> Result<Client, ServiceError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Decode a response into `T`, or into a `ServiceError::Status` carrying the
/// body's `error` field.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ServiceError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        debug!(status = status.as_u16(), "Service call succeeded");
        let text = if body.trim().is_empty() { "null" } else { body.as_str() };
        return Ok(serde_json::from_str(text)?);
    }

    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty());

    warn!(status = status.as_u16(), error = ?message, "Service call failed");

    Err(ServiceError::Status {
        status: status.as_u16(),
        message,
    })
}
