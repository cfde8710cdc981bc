//! Core domain types: tickets, comments and their identifiers

mod builders;
mod comment;
mod id;
mod ticket;

pub use builders::{CommentBuilder, TicketBuilder};
pub use comment::{Comment, CommentInput, NewComment};
pub use id::{CommentId, TicketId};
pub use ticket::{NewTicket, Ticket, TicketUpdate};
