//! Endpoints and timeouts for the registration flow.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    /// Account service endpoint
    #[serde(default)]
    pub account_service: AccountServiceConfig,

    /// Welcome message service endpoint
    #[serde(default)]
    pub message_service: MessageServiceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountServiceConfig {
    /// Base URL serving `/register` and `/login`
    #[serde(default = "default_account_service_url")]
    pub url: String,

    /// Per-request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageServiceConfig {
    /// Base URL serving `/generate-message`
    #[serde(default = "default_message_service_url")]
    pub url: String,

    /// Per-request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            url: default_account_service_url(),
            timeout: default_timeout(),
        }
    }
}

impl Default for MessageServiceConfig {
    fn default() -> Self {
        Self {
            url: default_message_service_url(),
            timeout: default_timeout(),
        }
    }
}

fn default_account_service_url() -> String {
    "http://localhost:5000".into()
}

fn default_message_service_url() -> String {
    "http://localhost:3000".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(15)
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.account_service.url, "http://localhost:5000");
        assert_eq!(config.message_service.url, "http://localhost:3000");
        assert_eq!(config.account_service.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_partial_override() {
        let config: ClientConfig = serde_json::from_value(serde_json::json!({
            "message_service": { "url": "https://messages.example.com", "timeout": "5s" }
        }))
        .unwrap();

        assert_eq!(config.message_service.url, "https://messages.example.com");
        assert_eq!(config.message_service.timeout, Duration::from_secs(5));
        assert_eq!(config.account_service.url, "http://localhost:5000");
    }
}
