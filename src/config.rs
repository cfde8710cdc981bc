//! Layered configuration
//!
//! Settings are resolved from built-in defaults, then an optional TOML file,
//! then `HELPDESK_<SECTION>__<KEY>` environment variables. Command-line flags
//! are applied on top by the binary.

use crate::error::Result;
use config::{Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "helpdesk.toml";

/// Default document store connection string
pub const DEFAULT_MONGODB_URI: &str = "mongodb://127.0.0.1:27017/helpdesk";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Socket address string the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Which repository implementation to run against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Mongo,
    Memory,
}

/// Document store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub uri: String,
    /// Overrides the database named in `uri`
    pub database: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Mongo,
            uri: DEFAULT_MONGODB_URI.to_string(),
            database: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from `path` (or `helpdesk.toml`) and the process environment
    ///
    /// A missing file is skipped; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(File::from(file).required(false))
            .add_source(env)
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("HELPDESK")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
