//! Error types for the helpdesk backend
//!
//! Every fallible operation in the library returns [`Result`], whose error
//! type is [`HelpdeskError`]. The HTTP layer maps these onto status codes in
//! `api::error`.

use thiserror::Error;

/// Result type alias for helpdesk operations
pub type Result<T> = std::result::Result<T, HelpdeskError>;

/// Main error type
#[derive(Error, Debug)]
pub enum HelpdeskError {
    /// The identifier is not a syntactically valid document id
    #[error("Invalid identifier: {id}")]
    InvalidIdentifier { id: String },

    /// No ticket exists for a well-formed identifier
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: String },

    /// A required field is missing or empty
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Storage backend failure not tied to a specific driver
    #[error("Storage error: {0}")]
    Storage(String),

    /// MongoDB driver failure
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Configuration loading failure
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HelpdeskError {
    /// Create a storage error with a message
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a validation error for a required field
    pub fn required(field: &str) -> Self {
        Self::Validation(format!("`{field}` is required"))
    }

    /// Stable kind name exposed to HTTP clients in 500 responses
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier { .. } => "InvalidIdentifier",
            Self::TicketNotFound { .. } => "NotFound",
            Self::Validation(_) => "ValidationError",
            _ => "StorageFailure",
        }
    }

    /// Check if the error comes from configuration loading
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(e) => format!("Configuration problem: {e}"),
            Self::Database(e) => format!("Could not reach the document store: {e}"),
            _ => self.to_string(),
        }
    }
}
