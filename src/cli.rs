//! Command-line interface
//!
//! Flags override values from the configuration file and
//! `HELPDESK_*` environment variables.

use crate::config::{Config, StorageBackend};
use clap::Parser;
use std::path::PathBuf;

/// Helpdesk ticketing backend
#[derive(Parser, Debug)]
#[command(name = "helpdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./helpdesk.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI")]
    pub mongodb_uri: Option<String>,

    /// Use non-persistent in-memory storage instead of MongoDB
    #[arg(long)]
    pub in_memory: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply flag values on top of a loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(uri) = &self.mongodb_uri {
            config.storage.uri.clone_from(uri);
        }
        if self.in_memory {
            config.storage.backend = StorageBackend::Memory;
        }
        if self.verbose {
            config.logging.level = "debug".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "helpdesk",
            "--port",
            "8080",
            "--mongodb-uri",
            "mongodb://db:27017/desk",
            "--in-memory",
        ]);
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.mongodb_uri.as_deref(), Some("mongodb://db:27017/desk"));
        assert!(cli.in_memory);
    }

    #[test]
    fn test_apply_overrides_only_supplied_flags() {
        let cli = Cli::parse_from(["helpdesk", "-p", "7000", "--verbose"]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.server.port, 7000);
        assert_eq!(config.storage.backend, StorageBackend::Mongo);
        assert_eq!(config.logging.level, "debug");
    }
}
