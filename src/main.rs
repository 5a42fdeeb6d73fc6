//! Assignment API server.
//!
//! This is the application entry point. It parses the CLI, loads
//! configuration (TOML file plus environment overrides), initializes tracing,
//! builds the Postgres connection pool, sets up the Axum router, and starts
//! the HTTP server.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assignment_api::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use assignment_api::http::server::start_server;
use assignment_api::routes::create_router;
use assignment_api::state::AppState;
use assignment_api::store::PgStore;

/// Assignment API: record course assignments over HTTP
#[derive(Parser, Debug)]
#[command(name = "assignment-api", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "assignment_api=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration before tracing so the log format setting applies
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let filter = tracing_subscriber::EnvFilter::new(&log_filter);
    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(
        environment = ?config.environment,
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    // Build the connection pool. Connections are lazy: startup succeeds even
    // if the database is unreachable, and inserts fail until it recovers.
    let store = PgStore::connect(&config.database)?;
    tracing::info!(
        max_connections = config.database.max_connections,
        "Database pool initialized"
    );

    // Create application state and router
    let state = AppState::new(config.clone(), Arc::new(store));
    let app = create_router(state);

    // Start server
    start_server(app, &config).await?;

    Ok(())
}
