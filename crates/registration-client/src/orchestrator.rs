//! Registration and login sequencing.

use crate::account::{AccountService, HttpAccountService};
use crate::config::ClientConfig;
use crate::error::{LoginError, RegistrationError, ServiceError};
use crate::types::{LoginRequest, NewAccount, RegistrationRequest, RegistrationResult};
use crate::welcome::{HttpWelcomeMessageService, WelcomeMessageService};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Runs account creation and welcome message generation as one user action.
///
/// The two calls are strictly sequential: the message is only requested
/// once the account exists. Nothing is retried or rolled back.
#[derive(Clone)]
pub struct RegistrationOrchestrator {
    accounts: Arc<dyn AccountService>,
    messages: Arc<dyn WelcomeMessageService>,
}

impl RegistrationOrchestrator {
    pub fn new(
        accounts: Arc<dyn AccountService>,
        messages: Arc<dyn WelcomeMessageService>,
    ) -> Self {
        Self { accounts, messages }
    }

    /// Build HTTP-backed dependencies from configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ServiceError> {
        let accounts = HttpAccountService::new(
            &config.account_service.url,
            config.account_service.timeout,
        )?;
        let messages = HttpWelcomeMessageService::new(
            &config.message_service.url,
            config.message_service.timeout,
        )?;

        Ok(Self::new(Arc::new(accounts), Arc::new(messages)))
    }

    /// Register a user and fetch their welcome message.
    ///
    /// If the welcome message fails after the account was created, the whole
    /// registration still fails and the account is left in place.
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResult, RegistrationError> {
        request.validate()?;

        let account = self
            .accounts
            .create_account(&NewAccount::from(request))
            .await
            .map_err(|e| {
                warn!(error = %e, "Account creation failed");
                RegistrationError::from_account(e)
            })?;

        info!("Account created");

        let welcome_message = self
            .messages
            .generate(&request.username)
            .await
            .map_err(|e| {
                warn!(error = %e, "Welcome message failed after account creation");
                RegistrationError::from_message(e)
            })?;

        info!("Registration complete");
        Ok(RegistrationResult::new(account, welcome_message))
    }

    /// Log a user in against the account service.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<Value, LoginError> {
        request.validate()?;

        let session = self.accounts.login(request).await.map_err(|e| {
            warn!(error = %e, "Login failed");
            LoginError::from(e)
        })?;

        info!("Login succeeded");
        Ok(session)
    }
}
