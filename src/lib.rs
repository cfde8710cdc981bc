//! helpdesk - A minimal helpdesk ticketing backend
//!
//! Clients create tickets, list them, fetch a ticket with its comment thread,
//! update tickets and append comments, over a JSON HTTP API backed by MongoDB.
//!
//! The crate is layered leaf-first:
//! - [`storage`]: one repository trait per entity, with MongoDB and
//!   in-memory implementations
//! - [`api`]: axum handlers and router built on top of the repositories
//! - [`config`]: layered configuration for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use helpdesk::api::{AppState, router};
//! use helpdesk::storage::StorageClient;
//!
//! let client = StorageClient::connect("mongodb://127.0.0.1:27017/helpdesk", None).await?;
//! let app = router(AppState::mongo(&client));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! ```

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{HelpdeskError, Result};
