//! MongoDB-backed repositories
//!
//! A single [`StorageClient`] owns the driver's connection pool and hands out
//! the typed `tickets` and `comments` collections. Each repository wraps one
//! collection and converts between stored documents and domain types.

use super::{CommentRepository, TicketRepository};
use crate::core::{Comment, CommentId, NewComment, NewTicket, Ticket, TicketId, TicketUpdate};
use crate::error::Result;
use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Document, doc};
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Database used when neither the configuration nor the URI names one
pub const DEFAULT_DATABASE: &str = "helpdesk";

const TICKETS: &str = "tickets";
const COMMENTS: &str = "comments";

/// Stored form of a ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub priority: String,
    #[serde(rename = "createdAt")]
    pub created_at: bson::DateTime,
}

impl From<&Ticket> for TicketDocument {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.as_object_id(),
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            priority: ticket.priority.clone(),
            created_at: bson::DateTime::from_chrono(ticket.created_at),
        }
    }
}

impl From<TicketDocument> for Ticket {
    fn from(doc: TicketDocument) -> Self {
        Self {
            id: TicketId::from_object_id(doc.id),
            title: doc.title,
            description: doc.description,
            priority: doc.priority,
            created_at: doc.created_at.to_chrono(),
        }
    }
}

/// Stored form of a comment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "ticketId")]
    pub ticket_id: ObjectId,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: bson::DateTime,
}

impl From<&Comment> for CommentDocument {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.as_object_id(),
            ticket_id: comment.ticket_id.as_object_id(),
            body: comment.body.clone(),
            author: comment.author.clone(),
            created_at: bson::DateTime::from_chrono(comment.created_at),
        }
    }
}

impl From<CommentDocument> for Comment {
    fn from(doc: CommentDocument) -> Self {
        Self {
            id: CommentId::from_object_id(doc.id),
            ticket_id: TicketId::from_object_id(doc.ticket_id),
            body: doc.body,
            author: doc.author,
            created_at: doc.created_at.to_chrono(),
        }
    }
}

/// Handle on the helpdesk database
#[derive(Debug, Clone)]
pub struct StorageClient {
    database: Database,
}

impl StorageClient {
    /// Build a client from a connection string
    ///
    /// Only URI parsing can fail here. Reachability is checked in the
    /// background: an unreachable server is logged and requests fail
    /// individually until it comes back.
    pub async fn connect(uri: &str, database: Option<&str>) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let database = match database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };

        let storage = Self { database };
        let probe = storage.clone();
        tokio::spawn(async move { probe.verify().await });

        Ok(storage)
    }

    /// Name of the database in use
    #[must_use]
    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    /// The `tickets` collection
    #[must_use]
    pub fn tickets(&self) -> Collection<TicketDocument> {
        self.database.collection(TICKETS)
    }

    /// The `comments` collection
    #[must_use]
    pub fn comments(&self) -> Collection<CommentDocument> {
        self.database.collection(COMMENTS)
    }

    /// Round-trip a `ping` to the server
    pub async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn verify(&self) {
        match self.ping().await {
            Ok(()) => {
                info!(database = self.database_name(), "MongoDB connected");
                self.ensure_indexes().await;
            },
            Err(e) => error!(error = %e, "MongoDB connection failed"),
        }
    }

    async fn ensure_indexes(&self) {
        let by_created = IndexModel::builder().keys(doc! { "createdAt": -1 }).build();
        if let Err(e) = self.tickets().create_index(by_created).await {
            warn!(error = %e, "Failed to create tickets index");
        }

        let by_ticket = IndexModel::builder()
            .keys(doc! { "ticketId": 1, "createdAt": 1 })
            .build();
        if let Err(e) = self.comments().create_index(by_ticket).await {
            warn!(error = %e, "Failed to create comments index");
        }
    }
}

/// Ticket repository over the `tickets` collection
#[derive(Debug, Clone)]
pub struct MongoTicketRepository {
    collection: Collection<TicketDocument>,
}

impl MongoTicketRepository {
    #[must_use]
    pub fn new(client: &StorageClient) -> Self {
        Self {
            collection: client.tickets(),
        }
    }
}

#[async_trait]
impl TicketRepository for MongoTicketRepository {
    async fn create(&self, ticket: NewTicket) -> Result<Ticket> {
        let ticket = ticket.into_ticket(TicketId::new())?;
        let document = TicketDocument::from(&ticket);
        self.collection.insert_one(&document).await?;
        // Return the stored form so timestamp precision matches later reads
        Ok(document.into())
    }

    async fn list_all(&self) -> Result<Vec<Ticket>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .await?;
        let documents: Vec<TicketDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Ticket::from).collect())
    }

    async fn get_by_id(&self, id: &TicketId) -> Result<Option<Ticket>> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.as_object_id() })
            .await?;
        Ok(document.map(Ticket::from))
    }

    async fn update_by_id(&self, id: &TicketId, update: TicketUpdate) -> Result<Option<Ticket>> {
        if let Err(e) = update.validate() {
            return match self.get_by_id(id).await? {
                Some(_) => Err(e),
                None => Ok(None),
            };
        }
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let document = self
            .collection
            .find_one_and_update(
                doc! { "_id": id.as_object_id() },
                doc! { "$set": set_document(&update) },
            )
            .return_document(ReturnDocument::After)
            .await?;
        Ok(document.map(Ticket::from))
    }
}

fn set_document(update: &TicketUpdate) -> Document {
    let mut set = Document::new();
    if let Some(title) = &update.title {
        set.insert("title", title.as_str());
    }
    if let Some(description) = &update.description {
        set.insert("description", description.as_str());
    }
    if let Some(priority) = &update.priority {
        set.insert("priority", priority.as_str());
    }
    if let Some(created_at) = update.created_at {
        set.insert("createdAt", bson::DateTime::from_chrono(created_at));
    }
    set
}

/// Comment repository over the `comments` collection
#[derive(Debug, Clone)]
pub struct MongoCommentRepository {
    collection: Collection<CommentDocument>,
}

impl MongoCommentRepository {
    #[must_use]
    pub fn new(client: &StorageClient) -> Self {
        Self {
            collection: client.comments(),
        }
    }
}

#[async_trait]
impl CommentRepository for MongoCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment> {
        let comment = comment.into_comment(CommentId::new())?;
        let document = CommentDocument::from(&comment);
        self.collection.insert_one(&document).await?;
        Ok(document.into())
    }

    async fn list_by_ticket(&self, ticket_id: &TicketId) -> Result<Vec<Comment>> {
        let cursor = self
            .collection
            .find(doc! { "ticketId": ticket_id.as_object_id() })
            .sort(doc! { "createdAt": 1, "_id": 1 })
            .await?;
        let documents: Vec<CommentDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Comment::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CommentInput, NewTicket};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_ticket_document_field_names() {
        let ticket = NewTicket::new("Printer down", "Office printer jammed", "high")
            .into_ticket(TicketId::new())
            .unwrap();
        let document = bson::to_document(&TicketDocument::from(&ticket)).unwrap();

        assert_eq!(document.get_object_id("_id").unwrap(), ticket.id.as_object_id());
        assert_eq!(document.get_str("priority").unwrap(), "high");
        assert!(document.get_datetime("createdAt").is_ok());
    }

    #[test]
    fn test_ticket_document_truncates_to_millis() {
        let created_at = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let mut new = NewTicket::new("t", "d", "p");
        new.created_at = Some(created_at);
        let ticket = new.into_ticket(TicketId::new()).unwrap();

        let stored: Ticket = TicketDocument::from(&ticket).into();
        assert_eq!(stored.id, ticket.id);
        assert_eq!(stored.created_at.timestamp_millis(), created_at.timestamp_millis());
    }

    #[test]
    fn test_comment_document_omits_missing_author() {
        let comment = NewComment::new(
            TicketId::new(),
            CommentInput {
                body: Some("hi".to_string()),
                author: None,
            },
        )
        .into_comment(CommentId::new())
        .unwrap();
        let document = bson::to_document(&CommentDocument::from(&comment)).unwrap();

        assert!(!document.contains_key("author"));
        assert_eq!(
            document.get_object_id("ticketId").unwrap(),
            comment.ticket_id.as_object_id()
        );
    }

    #[test]
    fn test_set_document_contains_only_supplied_fields() {
        let update = TicketUpdate {
            priority: Some("urgent".to_string()),
            created_at: Some(Utc::now()),
            ..TicketUpdate::default()
        };
        let set = set_document(&update);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get_str("priority").unwrap(), "urgent");
        assert!(set.get_datetime("createdAt").is_ok());
        assert!(!set.contains_key("title"));
    }
}
