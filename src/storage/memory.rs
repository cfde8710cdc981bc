//! In-memory repositories
//!
//! Non-persistent implementations of both repository traits. Used by the
//! `--in-memory` development mode and throughout the test suite. Ordering
//! follows the same rules as the MongoDB backend: ties on `createdAt` are
//! broken by insertion order.

use super::{CommentRepository, TicketRepository};
use crate::core::{Comment, CommentId, NewComment, NewTicket, Ticket, TicketId, TicketUpdate};
use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Ticket collection held in a vector, in insertion order
#[derive(Debug, Default)]
pub struct MemoryTicketRepository {
    tickets: RwLock<Vec<Ticket>>,
}

impl MemoryTicketRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TicketRepository for MemoryTicketRepository {
    async fn create(&self, ticket: NewTicket) -> Result<Ticket> {
        let ticket = ticket.into_ticket(TicketId::new())?;
        self.tickets.write().await.push(ticket.clone());
        Ok(ticket)
    }

    async fn list_all(&self) -> Result<Vec<Ticket>> {
        // Reverse first so the stable sort leaves later insertions ahead on ties
        let mut tickets: Vec<Ticket> = self.tickets.read().await.iter().rev().cloned().collect();
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tickets)
    }

    async fn get_by_id(&self, id: &TicketId) -> Result<Option<Ticket>> {
        Ok(self
            .tickets
            .read()
            .await
            .iter()
            .find(|t| &t.id == id)
            .cloned())
    }

    async fn update_by_id(&self, id: &TicketId, update: TicketUpdate) -> Result<Option<Ticket>> {
        let mut tickets = self.tickets.write().await;
        let Some(ticket) = tickets.iter_mut().find(|t| &t.id == id) else {
            return Ok(None);
        };

        update.validate()?;
        update.apply_to(ticket);
        Ok(Some(ticket.clone()))
    }
}

/// Comment collection held in a vector, in insertion order
#[derive(Debug, Default)]
pub struct MemoryCommentRepository {
    comments: RwLock<Vec<Comment>>,
}

impl MemoryCommentRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment> {
        let comment = comment.into_comment(CommentId::new())?;
        self.comments.write().await.push(comment.clone());
        Ok(comment)
    }

    async fn list_by_ticket(&self, ticket_id: &TicketId) -> Result<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .read()
            .await
            .iter()
            .filter(|c| &c.ticket_id == ticket_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }
}
