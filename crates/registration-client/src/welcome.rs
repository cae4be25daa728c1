//! Welcome message service client.

use crate::error::ServiceError;
use crate::http::{build_client, endpoint, read_json};
use crate::types::{MessageRequest, MessageResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::instrument;

/// Source of generated welcome messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WelcomeMessageService: Send + Sync {
    /// Generate a greeting for `name`. `None` when the service answered
    /// without a message.
    async fn generate(&self, name: &str) -> Result<Option<String>, ServiceError>;
}

/// Message service reached over HTTP.
#[derive(Clone)]
pub struct HttpWelcomeMessageService {
    client: Client,
    base_url: String,
}

impl HttpWelcomeMessageService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl WelcomeMessageService for HttpWelcomeMessageService {
    #[instrument(skip(self))]
    async fn generate(&self, name: &str) -> Result<Option<String>, ServiceError> {
        let request = MessageRequest {
            name: name.to_string(),
        };

        let response = self
            .client
            .post(endpoint(&self.base_url, "/generate-message"))
            .json(&request)
            .send()
            .await?;

        let body: MessageResponse = read_json(response).await?;
        Ok(body.message)
    }
}
