//! In-memory implementation of the `AuthorRepository` trait.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use bookshelf_core::author::{Author, AuthorId, NewAuthor};
use bookshelf_core::error::CatalogError;
use bookshelf_core::repository::AuthorRepository;

/// Mutable state behind the repository mutex.
#[derive(Debug)]
struct MemState {
    /// Next id to hand out. Monotonically increasing, starts at 1.
    next_id: AuthorId,
    /// Records keyed by id; the `BTreeMap` keeps iteration id-ascending.
    authors: BTreeMap<AuthorId, Author>,
}

/// In-memory author repository.
///
/// Shared across request handlers behind an `Arc`; the inner mutex is held
/// only for the duration of a single operation.
#[derive(Debug)]
pub struct MemAuthorRepository {
    inner: Mutex<MemState>,
}

impl MemAuthorRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MemState {
                next_id: 1,
                authors: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemState>, CatalogError> {
        self.inner
            .lock()
            .map_err(|_| CatalogError::Storage("author store mutex poisoned".into()))
    }
}

impl Default for MemAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthorRepository for MemAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, CatalogError> {
        let state = self.lock()?;
        Ok(state.authors.values().cloned().collect())
    }

    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, CatalogError> {
        let state = self.lock()?;
        Ok(state.authors.get(&id).cloned())
    }

    async fn insert(&self, author: NewAuthor) -> Result<Author, CatalogError> {
        let mut state = self.lock()?;
        let id = state.next_id;
        state.next_id += 1;
        let record = Author {
            id,
            name: author.name,
        };
        state.authors.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, author: Author) -> Result<Option<Author>, CatalogError> {
        let mut state = self.lock()?;
        if !state.authors.contains_key(&author.id) {
            return Ok(None);
        }
        state.authors.insert(author.id, author.clone());
        Ok(Some(author))
    }

    async fn delete_by_id(&self, id: AuthorId) -> Result<bool, CatalogError> {
        let mut state = self.lock()?;
        Ok(state.authors.remove(&id).is_some())
    }
}
