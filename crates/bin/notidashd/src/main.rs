//! # notidashd — notification dashboard daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize tracing
//! - Construct the reqwest API client (adapter)
//! - Construct the dashboard service, injecting the client via its port trait
//! - Spawn the background poller and stop it on shutdown
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (ctrl-c)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use notidash_adapter_api_reqwest::HttpNotificationApi;
use notidash_adapter_http_axum::router;
use notidash_adapter_http_axum::state::AppState;
use notidash_app::services::dashboard_service::DashboardService;
use notidash_app::services::poller::Poller;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.logging.filter)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Backend API client
    let api = HttpNotificationApi::new(config.backend_url());

    // Service, shared between the poller and the HTTP handlers
    let dashboard = Arc::new(DashboardService::new(api));

    // Background poller; its first refresh fires immediately, so the page
    // has data as soon as the server answers
    let poller = Poller::new(Arc::clone(&dashboard), config.poll_period()).spawn();

    // HTTP
    let state = AppState::from_arc(dashboard);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        backend = config.backend_url(),
        "notidashd listening on http://{bind_addr}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    poller.stop().await;
    tracing::info!("notidashd stopped");

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for ctrl-c");
    tracing::info!("shutdown signal received");
}
