//! Welcome message generation.

use crate::error::MessageServiceError;
use llm_client::{ChatClient, Message};
use tracing::{debug, error, instrument};

/// Builds the single-turn instruction sent upstream for `name`.
pub fn welcome_prompt(name: &str) -> String {
    format!(
        "Generate a friendly, short welcome message for a new user named {}. Keep it under 100 characters.",
        name
    )
}

/// Produces welcome messages by delegating to a chat completion API.
///
/// Stateless apart from the client; one upstream call per message.
#[derive(Clone)]
pub struct WelcomeMessageGenerator {
    client: ChatClient,
}

impl WelcomeMessageGenerator {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    /// Model used upstream.
    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Generate a welcome message for `name`.
    ///
    /// The completion text is returned unmodified. The 100-character limit
    /// is only an instruction to the model.
    #[instrument(skip(self))]
    pub async fn generate_message(&self, name: &str) -> Result<String, MessageServiceError> {
        let messages = vec![Message::user(welcome_prompt(name))];

        match self.client.chat(messages, None, None).await {
            Ok(message) => {
                debug!(length = message.chars().count(), "Welcome message generated");
                Ok(message)
            }
            Err(e) => {
                error!(error = %e, "Welcome message generation failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_name() {
        let prompt = welcome_prompt("Ana");
        assert!(prompt.contains("new user named Ana."));
        assert!(prompt.contains("under 100 characters"));
    }

    #[test]
    fn test_prompt_passes_empty_name_through() {
        assert_eq!(
            welcome_prompt(""),
            "Generate a friendly, short welcome message for a new user named . Keep it under 100 characters."
        );
    }
}
