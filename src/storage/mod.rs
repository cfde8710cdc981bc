//! Storage layer
//!
//! One repository trait per entity, with a MongoDB backend for production
//! and an in-memory backend for development and tests.

mod memory;
mod mongo;
mod repository;

pub use memory::{MemoryCommentRepository, MemoryTicketRepository};
pub use mongo::{
    CommentDocument, DEFAULT_DATABASE, MongoCommentRepository, MongoTicketRepository,
    StorageClient, TicketDocument,
};
pub use repository::{CommentRepository, TicketRepository};

#[cfg(test)]
pub use repository::{MockCommentRepository, MockTicketRepository};
