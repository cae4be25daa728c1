//! Registration and login errors.

use thiserror::Error;

/// Message shown when a form field is missing.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";
/// Fallback shown when a failed registration carries no server message.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";
/// Fallback shown when a failed login carries no server message.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Outcome of a single failed HTTP call to a dependency.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The service answered with a non-success status.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Status { status: u16, message: Option<String> },

    /// The request never produced a response (connect, timeout, TLS...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body could not be decoded.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ServiceError {
    /// Status code, when the service responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The `error` field of the response body, when present.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ServiceError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ServiceError::Transport(_))
    }
}

/// Dependency that a transport failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    AccountService,
    MessageService,
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dependency::AccountService => f.write_str("account service"),
            Dependency::MessageService => f.write_str("message service"),
        }
    }
}

/// Registration failure.
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Missing required field: {field}")]
    Validation { field: &'static str },

    #[error("Account service error: {0}")]
    AccountService(#[source] ServiceError),

    #[error("Message service error: {0}")]
    MessageService(#[source] ServiceError),

    #[error("Could not reach {dependency}: {source}")]
    Transport {
        dependency: Dependency,
        #[source]
        source: ServiceError,
    },
}

impl RegistrationError {
    pub(crate) fn from_account(e: ServiceError) -> Self {
        if e.is_transport() {
            RegistrationError::Transport {
                dependency: Dependency::AccountService,
                source: e,
            }
        } else {
            RegistrationError::AccountService(e)
        }
    }

    pub(crate) fn from_message(e: ServiceError) -> Self {
        if e.is_transport() {
            RegistrationError::Transport {
                dependency: Dependency::MessageService,
                source: e,
            }
        } else {
            RegistrationError::MessageService(e)
        }
    }

    /// The single human-readable message for the presentation layer.
    pub fn user_message(&self) -> String {
        match self {
            RegistrationError::Validation { .. } => MISSING_FIELDS_MESSAGE.to_string(),
            RegistrationError::AccountService(e) | RegistrationError::MessageService(e) => e
                .server_message()
                .unwrap_or(REGISTRATION_FAILED_MESSAGE)
                .to_string(),
            RegistrationError::Transport { .. } => REGISTRATION_FAILED_MESSAGE.to_string(),
        }
    }

    /// True when the account was created before the failure happened.
    ///
    /// The account is not rolled back in that case.
    pub fn account_created(&self) -> bool {
        matches!(
            self,
            RegistrationError::MessageService(_)
                | RegistrationError::Transport {
                    dependency: Dependency::MessageService,
                    ..
                }
        )
    }
}

/// Login failure.
#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Missing required field: {field}")]
    Validation { field: &'static str },

    #[error("Account service error: {0}")]
    AccountService(#[source] ServiceError),

    #[error("Could not reach account service: {0}")]
    Transport(#[source] ServiceError),
}

impl From<ServiceError> for LoginError {
    fn from(e: ServiceError) -> Self {
        if e.is_transport() {
            LoginError::Transport(e)
        } else {
            LoginError::AccountService(e)
        }
    }
}

impl LoginError {
    /// The single human-readable message for the presentation layer.
    pub fn user_message(&self) -> String {
        match self {
            LoginError::Validation { .. } => MISSING_FIELDS_MESSAGE.to_string(),
            LoginError::AccountService(e) => {
                e.server_message().unwrap_or(LOGIN_FAILED_MESSAGE).to_string()
            }
            LoginError::Transport(_) => LOGIN_FAILED_MESSAGE.to_string(),
        }
    }
}
