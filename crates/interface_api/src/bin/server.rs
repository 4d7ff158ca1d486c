//! Insurance Premium Calculator - API Server Binary
//!
//! This binary starts the HTTP API server for the premium calculator.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin premium-api
//!
//! # Run with environment variables
//! API_HOST=127.0.0.1 API_PORT=9000 API_LOG_FORMAT=json cargo run --bin premium-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_LOG_FORMAT` - Log format: pretty or json (default: pretty)
//! * `RUST_LOG` - Overrides `API_LOG_LEVEL` with a full filter directive

use anyhow::Context;
use interface_api::{
    config::{ApiConfig, LogFormat},
    create_router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - The configured address cannot be parsed
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let (config, config_error) = load_config();

    init_tracing(&config.log_level, config.log_format);

    if let Some(err) = config_error {
        tracing::warn!(error = %err, "Invalid environment configuration, using defaults");
    }

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Insurance Premium Calculator API Server"
    );

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    let app = create_router(config);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to defaults when the environment holds values that cannot be
/// parsed; the error is returned so it can be logged once tracing is up.
fn load_config() -> (ApiConfig, Option<config::ConfigError>) {
    match ApiConfig::from_env() {
        Ok(config) => (config, None),
        Err(err) => (ApiConfig::default(), Some(err)),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
/// * `log_format` - Human-readable or JSON lines
fn init_tracing(log_level: &str, log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// In-flight requests complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
