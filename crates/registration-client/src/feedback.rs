//! What the presentation layer should show after an attempt.

use crate::error::{LoginError, RegistrationError};
use crate::types::RegistrationResult;
use serde_json::Value;
use std::time::Duration;

/// Delay before moving from a successful registration to the login view.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_secs(2);

const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful!";
const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";

/// One notification per attempt.
///
/// `redirect_after` is advisory: the caller schedules navigation itself,
/// the flow that produced the result has already finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success {
        message: String,
        redirect_after: Option<Duration>,
    },
    Error {
        message: String,
    },
}

impl Feedback {
    pub fn from_registration(result: &Result<RegistrationResult, RegistrationError>) -> Self {
        match result {
            Ok(registration) => Feedback::Success {
                message: registration
                    .welcome_message
                    .clone()
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| REGISTRATION_SUCCESS_MESSAGE.to_string()),
                redirect_after: Some(LOGIN_REDIRECT_DELAY),
            },
            Err(e) => Feedback::Error {
                message: e.user_message(),
            },
        }
    }

    pub fn from_login(result: &Result<Value, LoginError>) -> Self {
        match result {
            Ok(session) => Feedback::Success {
                message: session
                    .get("message")
                    .and_then(Value::as_str)
                    .filter(|m| !m.is_empty())
                    .unwrap_or(LOGIN_SUCCESS_MESSAGE)
                    .to_string(),
                redirect_after: None,
            },
            Err(e) => Feedback::Error {
                message: e.user_message(),
            },
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Feedback::Success { message, .. } | Feedback::Error { message } => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Feedback::Error { .. })
    }
}
