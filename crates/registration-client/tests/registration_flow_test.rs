//! End-to-end tests for the registration flow over HTTP.

mod common;

use common::{orchestrator_with_timeout, test_orchestrator};
use registration_client::{
    ClientConfig, Dependency, Feedback, LoginError, LoginRequest, RegistrationError,
    RegistrationOrchestrator, RegistrationRequest,
};
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ana() -> RegistrationRequest {
    RegistrationRequest::new("Ana", "ana@x.com", "secret1")
}

#[tokio::test]
async fn test_register_end_to_end() {
    let accounts = MockServer::start().await;
    let messages = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(serde_json::json!({
            "email": "ana@x.com",
            "password": "secret1",
            "name": "Ana"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": 1, "name": "Ana" })),
        )
        .expect(1)
        .mount(&accounts)
        .await;

    Mock::given(method("POST"))
        .and(path("/generate-message"))
        .and(body_json(serde_json::json!({ "name": "Ana" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "message": "Welcome, Ana! Glad to have you." })),
        )
        .expect(1)
        .mount(&messages)
        .await;

    let result = test_orchestrator(&accounts, &messages)
        .register(&ana())
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        serde_json::json!({
            "id": 1,
            "name": "Ana",
            "welcomeMessage": "Welcome, Ana! Glad to have you."
        })
    );
}

#[tokio::test]
async fn test_account_rejection_skips_message_service() {
    let accounts = MockServer::start().await;
    let messages = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(serde_json::json!({ "error": "User already exists" })),
        )
        .expect(1)
        .mount(&accounts)
        .await;

    Mock::given(method("POST"))
        .and(path("/generate-message"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&messages)
        .await;

    let result = test_orchestrator(&accounts, &messages).register(&ana()).await;
    let err = result.as_ref().unwrap_err();

    match err {
        RegistrationError::AccountService(e) => assert_eq!(e.status(), Some(409)),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.user_message(), "User already exists");
    assert_eq!(Feedback::from_registration(&result).message(), "User already exists");
}

#[tokio::test]
async fn test_non_json_error_body_uses_fallback() {
    let accounts = MockServer::start().await;
    let messages = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&accounts)
        .await;

    let err = test_orchestrator(&accounts, &messages)
        .register(&ana())
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Registration failed");
}

#[tokio::test]
async fn test_message_failure_after_account_created() {
    let accounts = MockServer::start().await;
    let messages = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": 7 })))
        .expect(1)
        .mount(&accounts)
        .await;

    Mock::given(method("POST"))
        .and(path("/generate-message"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({ "error": "Failed to generate message" })),
        )
        .expect(1)
        .mount(&messages)
        .await;

    let err = test_orchestrator(&accounts, &messages)
        .register(&ana())
        .await
        .unwrap_err();

    // The account stays created; registration is still reported as failed.
    assert!(matches!(err, RegistrationError::MessageService(_)));
    assert!(err.account_created());
    assert_eq!(err.user_message(), "Failed to generate message");
}

#[tokio::test]
async fn test_missing_field_issues_no_requests() {
    let accounts = MockServer::start().await;
    let messages = MockServer::start().await;

    let err = test_orchestrator(&accounts, &messages)
        .register(&RegistrationRequest::new("Ana", "", "secret1"))
        .await
        .unwrap_err();

    assert!(matches!(err, RegistrationError::Validation { field: "email" }));
    assert!(accounts.received_requests().await.unwrap().is_empty());
    assert!(messages.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_message_service_is_transport_error() {
    let accounts = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": 3 })))
        .mount(&accounts)
        .await;

    let mut config = ClientConfig::default();
    config.account_service.url = accounts.uri();
    config.message_service.url = "http://127.0.0.1:9".to_string();
    config.message_service.timeout = Duration::from_secs(2);

    let err = RegistrationOrchestrator::from_config(&config)
        .unwrap()
        .register(&ana())
        .await
        .unwrap_err();

    match &err {
        RegistrationError::Transport { dependency, source } => {
            assert_eq!(*dependency, Dependency::MessageService);
            assert!(source.is_transport());
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.user_message(), "Registration failed");
}

#[tokio::test]
async fn test_slow_account_service_times_out() {
    let accounts = MockServer::start().await;
    let messages = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({ "id": 1 }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&accounts)
        .await;

    let err = orchestrator_with_timeout(&accounts, &messages, Duration::from_millis(200))
        .register(&ana())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RegistrationError::Transport {
            dependency: Dependency::AccountService,
            ..
        }
    ));
}

#[tokio::test]
async fn test_concurrent_registrations_are_independent() {
    let accounts = MockServer::start().await;
    let messages = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "ok": true })))
        .expect(2)
        .mount(&accounts)
        .await;

    Mock::given(method("POST"))
        .and(path("/generate-message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "message": "Hi!" })))
        .expect(2)
        .mount(&messages)
        .await;

    let orchestrator = test_orchestrator(&accounts, &messages);
    let bob = RegistrationRequest::new("Bob", "bob@x.com", "hunter2");
    let ana = ana();

    let (first, second) = tokio::join!(orchestrator.register(&ana), orchestrator.register(&bob));

    assert_eq!(first.unwrap().welcome_message.as_deref(), Some("Hi!"));
    assert_eq!(second.unwrap().welcome_message.as_deref(), Some("Hi!"));
}

#[tokio::test]
async fn test_login_success_and_failure() {
    let accounts = MockServer::start().await;
    let messages = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(serde_json::json!({ "email": "ana@x.com", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Login successful",
            "user": { "email": "ana@x.com", "name": "Ana" }
        })))
        .mount(&accounts)
        .await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "error": "Invalid email or password" })),
        )
        .mount(&accounts)
        .await;

    let orchestrator = test_orchestrator(&accounts, &messages);

    let session = orchestrator
        .login(&LoginRequest::new("ana@x.com", "secret1"))
        .await;
    assert_eq!(Feedback::from_login(&session).message(), "Login successful");
    assert_eq!(session.unwrap()["user"]["name"], "Ana");

    let err = orchestrator
        .login(&LoginRequest::new("ana@x.com", "nope"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoginError::AccountService(_)));
    assert_eq!(err.user_message(), "Invalid email or password");
}
