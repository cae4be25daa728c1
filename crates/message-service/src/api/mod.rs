//! HTTP API for the message service.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::{cors_layer, logging_middleware};
pub use types::*;

use crate::config::CorsConfig;
use crate::generator::WelcomeMessageGenerator;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Welcome message generator
    pub generator: Arc<WelcomeMessageGenerator>,
}

impl AppState {
    /// Create new application state.
    pub fn new(generator: WelcomeMessageGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/generate-message", post(handlers::generate_message))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
