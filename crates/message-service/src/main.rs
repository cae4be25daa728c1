//! Message service - Entry point.

use llm_client::ChatClient;
use message_service::{
    api::{create_router, AppState},
    config::Config,
    generator::WelcomeMessageGenerator,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting message service");

    let client = match ChatClient::new(
        &config.llm.api_key,
        &config.llm.base_url,
        &config.llm.model,
        config.llm.timeout,
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create completion client: {}", e);
            std::process::exit(1);
        }
    };
    info!(model = %config.llm.model, endpoint = %config.llm.base_url, "Completion client ready");

    if config.cors.allowed_origins.is_empty() {
        warn!("No CORS origins configured; browser clients will be rejected");
    } else {
        info!(origins = ?config.cors.allowed_origins, "CORS allow-list loaded");
    }

    let state = AppState::new(WelcomeMessageGenerator::new(client));
    let app = create_router(state, &config.cors);

    // Bind to address
    let addr = SocketAddr::new(
        config.server.listen_addr.parse().unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Shutting down...");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
