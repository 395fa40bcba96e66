//! Bookshelf catalogue web server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use bookshelf_authors::AuthorService;
use bookshelf_store::MemAuthorRepository;
use bookshelf_web::error::AppError;
use bookshelf_web::render::TemplateEngine;
use bookshelf_web::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Bookshelf catalogue server");

    // Read configuration from environment.
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;

    // Compile page templates and build application state.
    let templates = Arc::new(TemplateEngine::new()?);
    let repository = Arc::new(MemAuthorRepository::new());
    let state = AppState::new(AuthorService::new(repository), templates);

    let app = bookshelf_web::app(state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
