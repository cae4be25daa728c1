//! Common test utilities for integration tests.

use registration_client::{HttpAccountService, HttpWelcomeMessageService, RegistrationOrchestrator};
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

/// Create an orchestrator talking to the two mock servers.
pub fn test_orchestrator(accounts: &MockServer, messages: &MockServer) -> RegistrationOrchestrator {
    orchestrator_with_timeout(accounts, messages, Duration::from_secs(5))
}

pub fn orchestrator_with_timeout(
    accounts: &MockServer,
    messages: &MockServer,
    timeout: Duration,
) -> RegistrationOrchestrator {
    RegistrationOrchestrator::new(
        Arc::new(HttpAccountService::new(accounts.uri(), timeout).unwrap()),
        Arc::new(HttpWelcomeMessageService::new(messages.uri(), timeout).unwrap()),
    )
}
