use dotenv::dotenv;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use pam_calculator_api::config::{AppConfig, ConfigError};
use pam_calculator_api::create_application;

/// Errors that can occur during server initialization and running
#[derive(Debug, Error)]
enum AppError {
    /// Invalid environment configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error that occurs during server operations
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// The main entry point for the PAM calculator server
///
/// This function:
/// 1. Initializes environment variables from .env file
/// 2. Sets up tracing for logging
/// 3. Reads the configuration and builds the calculator
/// 4. Creates and starts the Axum web application
/// 5. Handles graceful shutdown
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_loaded = dotenv().is_ok();

    // Initialize tracing for structured logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(false)
            .with_ansi(true)
            .with_timer(fmt::time::uptime())
            .with_writer(std::io::stdout))
        .with(env_filter)
        .init();

    if !dotenv_loaded {
        warn!(".env file not found or couldn't be read. Using environment variables.");
    }

    run().await?;
    Ok(())
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;

    info!("🚀 Starting PAM calculator in {} mode", config.environment);
    match config.fixed_date {
        Some(date) => info!("Syrup advisory pinned to {}", date),
        None => info!("Syrup advisory follows the system clock"),
    }

    let app = create_application(&config);

    let addr = config.socket_addr();
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Sets up a signal handler for graceful shutdown
///
/// Waits for either CTRL+C or SIGTERM (on Unix systems).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down server...");
}
