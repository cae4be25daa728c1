//! Request and response records for the registration flow.

use crate::error::{LoginError, RegistrationError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Form input for a registration attempt.
#[derive(Clone, Default, Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegistrationRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Every field must be non-empty.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        first_missing(&[
            ("username", &self.username),
            ("email", &self.email),
            ("password", &self.password),
        ])
        .map_or(Ok(()), |field| Err(RegistrationError::Validation { field }))
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Credentials for a login attempt.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), LoginError> {
        first_missing(&[("email", &self.email), ("password", &self.password)])
            .map_or(Ok(()), |field| Err(LoginError::Validation { field }))
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Body of the account service's `POST /register`.
#[derive(Clone, Serialize)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl From<&RegistrationRequest> for NewAccount {
    fn from(request: &RegistrationRequest) -> Self {
        Self {
            email: request.email.clone(),
            password: request.password.clone(),
            name: request.username.clone(),
        }
    }
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Body of the message service's `POST /generate-message`.
#[derive(Debug, Clone, Serialize)]
pub struct MessageRequest {
    pub name: String,
}

/// Success body of the message service.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned by either service.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Account data merged with the generated welcome message.
///
/// Serializes as the account object with a `welcomeMessage` key added.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResult {
    #[serde(flatten)]
    pub account: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_message: Option<String>,
}

impl RegistrationResult {
    /// Merge an account payload with a welcome message.
    ///
    /// A payload that is not a JSON object is kept under an `account` key.
    pub fn new(account: Value, welcome_message: Option<String>) -> Self {
        let mut account = match account {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("account".to_string(), other);
                map
            }
        };
        account.remove("welcomeMessage");

        Self {
            account,
            welcome_message,
        }
    }
}

fn first_missing(fields: &[(&'static str, &String)]) -> Option<&'static str> {
    fields
        .iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
}
