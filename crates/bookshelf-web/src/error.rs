//! Bookshelf Web — HTTP error types.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use bookshelf_core::error::CatalogError;
use thiserror::Error;

/// Startup and runtime errors for the web server binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A page template failed to compile at startup.
    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Request-level error that maps onto an HTML error page.
#[derive(Debug, Error)]
pub enum PageError {
    /// The requested author does not exist.
    #[error("author not found")]
    NotFound,

    /// A domain or storage error bubbled up from the service.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A registered template failed to render.
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = match &self {
            PageError::NotFound => StatusCode::NOT_FOUND,
            PageError::Catalog(CatalogError::Validation(_)) => StatusCode::BAD_REQUEST,
            PageError::Catalog(CatalogError::Storage(_)) | PageError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Html(format!(
            "<!DOCTYPE html>\n<html><body><h1>{status}</h1><p>{self}</p></body></html>"
        ));

        (status, body).into_response()
    }
}
