//! AI Finance API Demo Server - Main Application Entry Point
//!
//! This is a demonstration REST API that serves scripted "AI-powered"
//! financial analysis payloads: behavioral analysis, portfolio optimization,
//! market prediction, and a conversational advisor. Every endpoint validates
//! a bearer token, parses the body into a typed request, and returns a fixed
//! literal response plus echoed fields and a timestamp.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Authentication**: static bearer token, SHA-256 digest comparison
//! - **Format**: JSON requests/responses
//! - **State**: none beyond the configured key digest
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration from environment variables (all fields defaulted)
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

mod app;
mod config;
mod error;
mod extractors;
mod handlers;
mod middleware;
mod models;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Build router with shared state
    let app = app::create_app(state::AppState::new(&config));

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/v1/health", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
