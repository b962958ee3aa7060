//! # HRMS API
//!
//! A small Axum service exposing create/read/update/delete over Employee
//! records kept in a MongoDB collection.
//!
//! ## Architecture
//!
//! - Axum handles HTTP routing and request/response lifecycle
//! - The store adapter (`db`) wraps the MongoDB collection behind a trait
//! - Connection settings default to `mongodb://localhost:27017`,
//!   database `fiber-hrms`, collection `employees`, listener `0.0.0.0:3000`

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use hrms_api::config::AppConfig;
use hrms_api::create_app;
use hrms_api::db::{AppDb, MongoEmployeeStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hrms_api=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting HRMS API");

    let config = AppConfig::from_env();

    // Connecting and pinging must both succeed before the listener opens.
    let store = MongoEmployeeStore::connect(&config)
        .await
        .with_context(|| format!("failed to connect to MongoDB at {}", config.mongodb_uri))?;
    let store: AppDb = Arc::new(store);

    let app = create_app(store);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HRMS API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
