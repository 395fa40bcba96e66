//! Author repository abstraction.

use async_trait::async_trait;

use crate::author::{Author, AuthorId, NewAuthor};
use crate::error::CatalogError;

/// Repository trait for loading and storing author records.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Returns all author records, ordered by ascending id.
    async fn find_all(&self) -> Result<Vec<Author>, CatalogError>;

    /// Looks up a single record. `Ok(None)` when no record has that id.
    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, CatalogError>;

    /// Persists a new record. The store assigns a fresh unique id.
    async fn insert(&self, author: NewAuthor) -> Result<Author, CatalogError>;

    /// Replaces the record with the same id. `Ok(None)` when no record
    /// with that id exists.
    async fn update(&self, author: Author) -> Result<Option<Author>, CatalogError>;

    /// Removes a record by id. Returns whether a record was removed.
    async fn delete_by_id(&self, id: AuthorId) -> Result<bool, CatalogError>;
}
