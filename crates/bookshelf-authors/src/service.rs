//! Author service — stateless facade over the author repository.
//!
//! The service owns no state of its own; it delegates storage entirely to
//! the injected repository and never recovers from storage errors.

use std::sync::Arc;

use bookshelf_core::author::{Author, AuthorId, NewAuthor};
use bookshelf_core::error::CatalogError;
use bookshelf_core::repository::AuthorRepository;

/// Domain facade brokering between the HTTP layer and the repository.
#[derive(Clone)]
pub struct AuthorService {
    repository: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    /// Creates a service backed by `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn AuthorRepository>) -> Self {
        Self { repository }
    }

    /// Returns all authors in the order the repository yields them.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if the repository fails.
    pub async fn find_all_authors(&self) -> Result<Vec<Author>, CatalogError> {
        self.repository.find_all().await
    }

    /// Looks up a single author. Absence is `Ok(None)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if the repository fails.
    pub async fn find_author_by_id(&self, id: AuthorId) -> Result<Option<Author>, CatalogError> {
        self.repository.find_by_id(id).await
    }

    /// Persists a new author and returns the stored record with its
    /// assigned id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` if the name is blank, or
    /// `CatalogError::Storage` if the repository fails.
    pub async fn create_author(&self, author: NewAuthor) -> Result<Author, CatalogError> {
        if author.name.trim().is_empty() {
            return Err(CatalogError::Validation(
                "author name must not be empty".into(),
            ));
        }
        self.repository.insert(author).await
    }

    /// Replaces the stored record with the same id. `Ok(None)` when no
    /// record with that id exists.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` if the name is blank, or
    /// `CatalogError::Storage` if the repository fails.
    pub async fn update_author(&self, author: Author) -> Result<Option<Author>, CatalogError> {
        if author.name.trim().is_empty() {
            return Err(CatalogError::Validation(
                "author name must not be empty".into(),
            ));
        }
        self.repository.update(author).await
    }

    /// Removes an author by id. Returns whether a record was removed.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if the repository fails.
    pub async fn delete_author(&self, id: AuthorId) -> Result<bool, CatalogError> {
        self.repository.delete_by_id(id).await
    }
}
