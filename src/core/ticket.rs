use super::{TicketBuilder, TicketId};
use crate::error::{HelpdeskError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A helpdesk request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Unique identifier, assigned by the store at creation
    pub id: TicketId,

    /// Short summary of the request
    pub title: String,

    /// Full description of the problem
    pub description: String,

    /// Free-form priority label (e.g. "high")
    pub priority: String,

    /// When the ticket was created
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by a client when creating a ticket
///
/// Every field is optional at the type level so that a missing field is
/// reported as a validation failure rather than a body-parsing failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewTicket {
    /// Convenience constructor with all required fields set
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            priority: Some(priority.into()),
            created_at: None,
        }
    }

    /// Check that `title`, `description` and `priority` are present and non-empty
    pub fn validate(&self) -> Result<()> {
        required("title", self.title.as_deref())?;
        required("description", self.description.as_deref())?;
        required("priority", self.priority.as_deref())?;
        Ok(())
    }

    /// Validate and turn the request into a ticket with the given id
    ///
    /// `created_at` defaults to now when the client did not supply one.
    pub fn into_ticket(self, id: TicketId) -> Result<Ticket> {
        self.validate()?;

        let mut builder = TicketBuilder::new()
            .id(id)
            .title(self.title.unwrap_or_default())
            .description(self.description.unwrap_or_default())
            .priority(self.priority.unwrap_or_default());
        if let Some(created_at) = self.created_at {
            builder = builder.created_at(created_at);
        }
        Ok(builder.build())
    }
}

/// Partial overwrite of a ticket's mutable fields
///
/// Fields left as `None` keep their stored value. `createdAt` can be
/// overwritten too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl TicketUpdate {
    /// True when no field would change
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.created_at.is_none()
    }

    /// Supplied text fields must not be empty
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("priority", &self.priority),
        ] {
            if let Some(value) = value {
                required(field, Some(value.as_str()))?;
            }
        }
        Ok(())
    }

    /// Overwrite the supplied fields on `ticket`
    pub fn apply_to(&self, ticket: &mut Ticket) {
        if let Some(title) = &self.title {
            ticket.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            ticket.description.clone_from(description);
        }
        if let Some(priority) = &self.priority {
            ticket.priority.clone_from(priority);
        }
        if let Some(created_at) = self.created_at {
            ticket.created_at = created_at;
        }
    }
}

pub(crate) fn required(field: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(HelpdeskError::required(field)),
    }
}
