//! Account service client.

use crate::error::ServiceError;
use crate::http::{build_client, endpoint, read_json};
use crate::types::{LoginRequest, NewAccount};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::instrument;

/// External system of record for accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create an account; returns the service's opaque account payload.
    async fn create_account(&self, account: &NewAccount) -> Result<Value, ServiceError>;

    /// Log in; returns the service's opaque session payload.
    async fn login(&self, credentials: &LoginRequest) -> Result<Value, ServiceError>;
}

/// Account service reached over HTTP.
#[derive(Clone)]
pub struct HttpAccountService {
    client: Client,
    base_url: String,
}

impl HttpAccountService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl AccountService for HttpAccountService {
    #[instrument(skip(self, account), fields(email = %account.email))]
    async fn create_account(&self, account: &NewAccount) -> Result<Value, ServiceError> {
        let response = self
            .client
            .post(endpoint(&self.base_url, "/register"))
            .json(account)
            .send()
            .await?;

        read_json(response).await
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    async fn login(&self, credentials: &LoginRequest) -> Result<Value, ServiceError> {
        let response = self
            .client
            .post(endpoint(&self.base_url, "/login"))
            .json(credentials)
            .send()
            .await?;

        read_json(response).await
    }
}
