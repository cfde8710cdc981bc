//! Test utilities for the helpdesk backend
//!
//! This module provides common test fixtures and utilities to reduce
//! duplication in test code across the codebase.

#![cfg(test)]

use crate::api::{AppState, router};
use crate::core::{
    Comment, CommentInput, NewComment, NewTicket, Ticket, TicketBuilder, TicketId,
};
use crate::storage::{
    CommentRepository, MemoryCommentRepository, MemoryTicketRepository, TicketRepository,
};
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Test fixture: in-memory repositories plus a router over them
pub struct TestApp {
    pub tickets: Arc<MemoryTicketRepository>,
    pub comments: Arc<MemoryCommentRepository>,
}

impl TestApp {
    /// Create an app with empty repositories
    pub fn new() -> Self {
        Self {
            tickets: Arc::new(MemoryTicketRepository::new()),
            comments: Arc::new(MemoryCommentRepository::new()),
        }
    }

    /// Router sharing this fixture's repositories
    pub fn router(&self) -> Router {
        router(AppState::new(self.tickets.clone(), self.comments.clone()))
    }

    /// Store a ticket directly, bypassing HTTP
    pub async fn seed_ticket(&self, title: &str) -> Ticket {
        self.tickets
            .create(NewTicket::new(title, format!("Description for {title}"), "medium"))
            .await
            .expect("Failed to save ticket")
    }

    /// Store a comment directly, bypassing HTTP
    pub async fn seed_comment(&self, ticket_id: &TicketId, body: &str) -> Comment {
        self.comments
            .create(NewComment::new(
                *ticket_id,
                CommentInput {
                    body: Some(body.to_string()),
                    author: Some("ops@example.com".to_string()),
                },
            ))
            .await
            .expect("Failed to save comment")
    }
}

/// Create a test ticket with default values
pub fn create_test_ticket(title: &str, priority: &str) -> Ticket {
    TicketBuilder::new()
        .title(title)
        .description(format!("Description for {title}"))
        .priority(priority)
        .build()
}

/// Send a request through `router` and decode the JSON response
pub async fn send(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = router.oneshot(request).await.expect("Router request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };
    (status, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_ticket_is_listed() {
        let app = TestApp::new();
        let ticket = app.seed_ticket("Bug fix").await;

        let (status, body) = send(app.router(), Method::GET, "/api/tickets", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], ticket.id.to_string());
    }

    #[test]
    fn test_create_test_ticket() {
        let ticket = create_test_ticket("Bug fix", "high");
        assert_eq!(ticket.title, "Bug fix");
        assert_eq!(ticket.priority, "high");
    }
}
