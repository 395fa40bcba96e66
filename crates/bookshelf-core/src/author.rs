//! Author catalogue entities.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned to an [`Author`] by the store on first save.
pub type AuthorId = i64;

/// A persisted author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Unique identifier. Assigned on first save, never mutated afterwards.
    pub id: AuthorId,
    /// Display name. Non-empty.
    pub name: String,
}

impl Author {
    /// Creates an author record with a known identifier.
    #[must_use]
    pub fn new(id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// An author that has not been persisted yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAuthor {
    /// Display name. Non-empty.
    pub name: String,
}

impl NewAuthor {
    /// Creates a draft author from a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
