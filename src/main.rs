//! helpdesk - minimal helpdesk ticketing backend
//!
//! This is the main entry point. It resolves configuration, sets up logging,
//! opens storage and runs the HTTP server until a shutdown signal arrives.

use clap::Parser;
use helpdesk::api::{ApiServer, AppState};
use helpdesk::cli::Cli;
use helpdesk::config::{Config, StorageBackend};
use helpdesk::error::HelpdeskError;
use helpdesk::storage::StorageClient;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        let code = match e.downcast_ref::<HelpdeskError>() {
            Some(err) => {
                eprintln!("Error: {}", err.user_message());
                if err.is_config_error() { 2 } else { 1 }
            },
            None => {
                eprintln!("Error: {e:#}");
                1
            },
        };
        process::exit(code);
    }
}

/// Resolve configuration and run the server
///
/// # Errors
///
/// Returns configuration, storage setup and bind errors
async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    init_logging(&config);

    let state = match config.storage.backend {
        StorageBackend::Mongo => {
            let client =
                StorageClient::connect(&config.storage.uri, config.storage.database.as_deref())
                    .await?;
            tracing::info!(database = client.database_name(), "Using MongoDB storage");
            AppState::mongo(&client)
        },
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on exit");
            AppState::in_memory()
        },
    };

    ApiServer::new(config.server, state).start().await?;
    Ok(())
}

/// `RUST_LOG` wins over the configured level
fn init_logging(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
