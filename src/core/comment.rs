use super::ticket::required;
use super::{CommentBuilder, CommentId, TicketId};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note attached to a ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,

    /// The ticket this comment belongs to
    pub ticket_id: TicketId,

    pub body: String,

    /// Free-text author, e.g. an email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Request body for adding a comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentInput {
    pub body: Option<String>,
    pub author: Option<String>,
}

/// A comment ready to be stored against a ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub ticket_id: TicketId,
    pub body: Option<String>,
    pub author: Option<String>,
}

impl NewComment {
    #[must_use]
    pub fn new(ticket_id: TicketId, input: CommentInput) -> Self {
        Self {
            ticket_id,
            body: input.body,
            author: input.author,
        }
    }

    /// `body` must be present and non-empty
    pub fn validate(&self) -> Result<()> {
        required("body", self.body.as_deref())
    }

    /// Validate and turn the request into a comment stamped with the current time
    pub fn into_comment(self, id: CommentId) -> Result<Comment> {
        self.validate()?;

        let mut builder = CommentBuilder::new()
            .id(id)
            .ticket_id(self.ticket_id)
            .body(self.body.unwrap_or_default());
        if let Some(author) = self.author {
            builder = builder.author(author);
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HelpdeskError;

    #[test]
    fn test_into_comment() {
        let ticket_id = TicketId::new();
        let comment = NewComment::new(
            ticket_id,
            CommentInput {
                body: Some("Checked, needs new toner".to_string()),
                author: Some("ops@x.com".to_string()),
            },
        )
        .into_comment(CommentId::new())
        .unwrap();

        assert_eq!(comment.ticket_id, ticket_id);
        assert_eq!(comment.body, "Checked, needs new toner");
        assert_eq!(comment.author.as_deref(), Some("ops@x.com"));
    }

    #[test]
    fn test_missing_body_is_validation_error() {
        let err = NewComment::new(TicketId::new(), CommentInput::default())
            .into_comment(CommentId::new())
            .unwrap_err();
        assert!(matches!(err, HelpdeskError::Validation(ref m) if m.contains("body")));
    }

    #[test]
    fn test_author_omitted_from_json_when_absent() {
        let comment = NewComment::new(
            TicketId::new(),
            CommentInput {
                body: Some("hi".to_string()),
                author: None,
            },
        )
        .into_comment(CommentId::new())
        .unwrap();

        let value = serde_json::to_value(&comment).unwrap();
        assert!(value.get("author").is_none());
        assert_eq!(value["ticketId"], comment.ticket_id.to_string());
    }
}
