//! Test repositories — mock `AuthorRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use bookshelf_core::author::{Author, AuthorId, NewAuthor};
use bookshelf_core::error::CatalogError;
use bookshelf_core::repository::AuthorRepository;

/// An author repository seeded with a fixed set of records that counts
/// every call it receives. Lookups scan the seeded records; inserts append
/// to them with the next free id.
#[derive(Debug)]
pub struct RecordingAuthorRepository {
    authors: Mutex<Vec<Author>>,
    find_all_calls: Mutex<usize>,
    inserted: Mutex<Vec<NewAuthor>>,
    deleted: Mutex<Vec<AuthorId>>,
}

impl RecordingAuthorRepository {
    /// Creates a recording repository seeded with `authors`.
    #[must_use]
    pub fn new(authors: Vec<Author>) -> Self {
        Self {
            authors: Mutex::new(authors),
            find_all_calls: Mutex::new(0),
            inserted: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    /// Number of `find_all` calls observed so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn find_all_calls(&self) -> usize {
        *self.find_all_calls.lock().unwrap()
    }

    /// Snapshot of all drafts passed to `insert`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn inserted_authors(&self) -> Vec<NewAuthor> {
        self.inserted.lock().unwrap().clone()
    }

    /// Snapshot of all ids passed to `delete_by_id`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn deleted_ids(&self) -> Vec<AuthorId> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthorRepository for RecordingAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, CatalogError> {
        *self.find_all_calls.lock().unwrap() += 1;
        Ok(self.authors.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, CatalogError> {
        let authors = self.authors.lock().unwrap();
        Ok(authors.iter().find(|a| a.id == id).cloned())
    }

    async fn insert(&self, author: NewAuthor) -> Result<Author, CatalogError> {
        self.inserted.lock().unwrap().push(author.clone());
        let mut authors = self.authors.lock().unwrap();
        let id = authors.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let record = Author {
            id,
            name: author.name,
        };
        authors.push(record.clone());
        Ok(record)
    }

    async fn update(&self, author: Author) -> Result<Option<Author>, CatalogError> {
        let mut authors = self.authors.lock().unwrap();
        match authors.iter_mut().find(|a| a.id == author.id) {
            Some(existing) => {
                *existing = author.clone();
                Ok(Some(author))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: AuthorId) -> Result<bool, CatalogError> {
        self.deleted.lock().unwrap().push(id);
        let mut authors = self.authors.lock().unwrap();
        let before = authors.len();
        authors.retain(|a| a.id != id);
        Ok(authors.len() < before)
    }
}

/// An author repository that holds no records and silently accepts writes.
/// Useful for testing "not found" scenarios and creation paths.
#[derive(Debug)]
pub struct EmptyAuthorRepository;

#[async_trait]
impl AuthorRepository for EmptyAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, CatalogError> {
        Ok(vec![])
    }

    async fn find_by_id(&self, _id: AuthorId) -> Result<Option<Author>, CatalogError> {
        Ok(None)
    }

    async fn insert(&self, author: NewAuthor) -> Result<Author, CatalogError> {
        Ok(Author {
            id: 1,
            name: author.name,
        })
    }

    async fn update(&self, _author: Author) -> Result<Option<Author>, CatalogError> {
        Ok(None)
    }

    async fn delete_by_id(&self, _id: AuthorId) -> Result<bool, CatalogError> {
        Ok(false)
    }
}

/// An author repository that always returns a storage error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingAuthorRepository;

#[async_trait]
impl AuthorRepository for FailingAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, CatalogError> {
        Err(CatalogError::Storage("connection refused".into()))
    }

    async fn find_by_id(&self, _id: AuthorId) -> Result<Option<Author>, CatalogError> {
        Err(CatalogError::Storage("connection refused".into()))
    }

    async fn insert(&self, _author: NewAuthor) -> Result<Author, CatalogError> {
        Err(CatalogError::Storage("connection refused".into()))
    }

    async fn update(&self, _author: Author) -> Result<Option<Author>, CatalogError> {
        Err(CatalogError::Storage("connection refused".into()))
    }

    async fn delete_by_id(&self, _id: AuthorId) -> Result<bool, CatalogError> {
        Err(CatalogError::Storage("connection refused".into()))
    }
}
