//! HTTP API
//!
//! All routes live under `/api`. Cross-origin requests are allowed from any
//! origin, and every request is traced.

pub mod error;
pub mod handlers;
pub mod server;

use crate::storage::{
    CommentRepository, MemoryCommentRepository, MemoryTicketRepository, MongoCommentRepository,
    MongoTicketRepository, StorageClient, TicketRepository,
};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use handlers::TicketDetail;
pub use server::ApiServer;

/// Repositories shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub tickets: Arc<dyn TicketRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl AppState {
    #[must_use]
    pub fn new(tickets: Arc<dyn TicketRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { tickets, comments }
    }

    /// Repositories backed by the given MongoDB client
    #[must_use]
    pub fn mongo(client: &StorageClient) -> Self {
        Self::new(
            Arc::new(MongoTicketRepository::new(client)),
            Arc::new(MongoCommentRepository::new(client)),
        )
    }

    /// Fresh, empty in-memory repositories
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryTicketRepository::new()),
            Arc::new(MemoryCommentRepository::new()),
        )
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let tickets = Router::new()
        .route("/tickets", get(handlers::list_tickets).post(handlers::create_ticket))
        .route(
            "/tickets/:id",
            get(handlers::get_ticket).put(handlers::update_ticket),
        )
        .route("/tickets/:id/comments", post(handlers::add_comment));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", tickets)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
