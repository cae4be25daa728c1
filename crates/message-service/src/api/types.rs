//! API request and response types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request to generate a welcome message.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateMessageRequest {
    /// Display name of the new user. Absent or `null` is treated as empty,
    /// other non-string values are used as their JSON text.
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
}

impl GenerateMessageRequest {
    /// Parse a request body regardless of its declared content type.
    /// An empty body is an empty request.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(name)) => name,
        Some(other) => other.to_string(),
    })
}

/// Generated welcome message.
#[derive(Debug, Serialize)]
pub struct GenerateMessageResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}
