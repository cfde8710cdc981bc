use super::{Comment, CommentId, Ticket, TicketId};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub const fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    #[must_use]
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        Ticket {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Builder for creating Comment instances
#[derive(Default)]
pub struct CommentBuilder {
    id: Option<CommentId>,
    ticket_id: Option<TicketId>,
    body: Option<String>,
    author: Option<String>,
}

impl CommentBuilder {
    /// Create a new comment builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment ID
    #[must_use]
    pub const fn id(mut self, id: CommentId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the owning ticket
    #[must_use]
    pub const fn ticket_id(mut self, ticket_id: TicketId) -> Self {
        self.ticket_id = Some(ticket_id);
        self
    }

    /// Set the body
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the author
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Build the comment
    pub fn build(self) -> Comment {
        Comment {
            id: self.id.unwrap_or_default(),
            ticket_id: self.ticket_id.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            author: self.author,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_builder() {
        let ticket = TicketBuilder::new()
            .title("Test Ticket")
            .description("A test ticket")
            .priority("high")
            .build();

        assert_eq!(ticket.title, "Test Ticket");
        assert_eq!(ticket.description, "A test ticket");
        assert_eq!(ticket.priority, "high");
    }

    #[test]
    fn test_comment_builder() {
        let ticket_id = TicketId::new();
        let comment = CommentBuilder::new()
            .ticket_id(ticket_id)
            .body("Looking into it")
            .build();

        assert_eq!(comment.ticket_id, ticket_id);
        assert_eq!(comment.body, "Looking into it");
        assert!(comment.author.is_none());
    }
}
