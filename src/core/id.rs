use crate::error::{HelpdeskError, Result};
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines a typed identifier backed by a document-store `ObjectId`.
///
/// Identifiers serialize as 24-character lowercase hex strings and reject
/// anything else on parse.
macro_rules! object_id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(ObjectId);

        impl $name {
            /// Generate a fresh identifier
            #[must_use]
            pub fn new() -> Self {
                Self(ObjectId::new())
            }

            /// Parse an identifier from its hex representation
            pub fn parse_str(s: &str) -> Result<Self> {
                ObjectId::parse_str(s)
                    .map(Self)
                    .map_err(|_| HelpdeskError::InvalidIdentifier { id: s.to_string() })
            }

            /// Wrap an existing `ObjectId`
            #[must_use]
            pub const fn from_object_id(id: ObjectId) -> Self {
                Self(id)
            }

            /// The underlying `ObjectId`
            #[must_use]
            pub const fn as_object_id(&self) -> ObjectId {
                self.0
            }

            /// Short form for log lines
            #[must_use]
            pub fn short(&self) -> String {
                self.0.to_hex()[16..].to_string()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.to_hex())
            }
        }

        impl TryFrom<String> for $name {
            type Error = HelpdeskError;

            fn try_from(value: String) -> Result<Self> {
                Self::parse_str(&value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.to_string()
            }
        }
    };
}

object_id_type!(
    /// Unique identifier for a ticket
    TicketId
);

object_id_type!(
    /// Unique identifier for a comment
    CommentId
);
