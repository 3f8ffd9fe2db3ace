//! Insurance Billing API Server Binary
//!
//! Starts the HTTP API over one in-memory insurer.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin insurance-billing-api
//!
//! # Run with environment variables
//! API_PORT=9090 API_START_TIME=2025-04-15T12:00:00 cargo run --bin insurance-billing-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_START_TIME` - Initial logical clock reading (default: wall clock)
//! * `API_RULES__*` - Underwriting rules, e.g. `API_RULES__VEHICLE_COVERAGE_RATIO`
//! * `API_SETTLEMENT__TOTAL_LOSS_RATIO` - Share of vehicle value that is a total loss

use std::net::SocketAddr;

use chrono::Local;
use domain_company::InsuranceCompany;
use interface_api::{create_router, config::ApiConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, creates the insurer and starts
/// the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The configured rules are out of range
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;

    init_tracing(&config.log_level);

    let start_time = config
        .start_time
        .unwrap_or_else(|| Local::now().naive_local());
    tracing::info!(
        host = %config.host,
        port = %config.port,
        %start_time,
        "Starting Insurance Billing API Server"
    );

    let company =
        InsuranceCompany::with_rules(start_time, config.rules.clone(), config.settlement.clone())?;

    let app = create_router(company, config.clone());

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
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
