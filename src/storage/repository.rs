use crate::core::{Comment, NewComment, NewTicket, Ticket, TicketId, TicketUpdate};
use crate::error::Result;
use async_trait::async_trait;

/// Repository trait for ticket storage operations
///
/// Identifiers arrive already parsed, so implementations never see a
/// malformed id. Implementations must call [`NewTicket::into_ticket`] (or
/// [`NewTicket::validate`]) before persisting anything.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Validates and inserts a new ticket, returning it with its assigned id
    async fn create(&self, ticket: NewTicket) -> Result<Ticket>;

    /// Loads every ticket, newest first
    async fn list_all(&self) -> Result<Vec<Ticket>>;

    /// Loads a ticket by ID, `None` if it does not exist
    async fn get_by_id(&self, id: &TicketId) -> Result<Option<Ticket>>;

    /// Overwrites the supplied fields and returns the updated ticket,
    /// `None` if it does not exist
    async fn update_by_id(&self, id: &TicketId, update: TicketUpdate) -> Result<Option<Ticket>>;
}

/// Repository trait for comment storage operations
///
/// No referential check against the ticket collection happens here; callers
/// confirm the ticket exists first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Validates and inserts a new comment
    async fn create(&self, comment: NewComment) -> Result<Comment>;

    /// Loads all comments on a ticket, oldest first
    async fn list_by_ticket(&self, ticket_id: &TicketId) -> Result<Vec<Comment>>;
}
