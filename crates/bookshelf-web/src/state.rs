//! Shared application state.

use std::sync::Arc;

use bookshelf_authors::AuthorService;

use crate::render::TemplateEngine;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Domain facade for the author catalogue.
    pub authors: AuthorService,
    /// Handlebars template registry.
    pub templates: Arc<TemplateEngine>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(authors: AuthorService, templates: Arc<TemplateEngine>) -> Self {
        Self { authors, templates }
    }
}
