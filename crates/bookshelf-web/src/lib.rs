//! Bookshelf Web — HTTP layer for the author catalogue.
//!
//! Handlers translate requests into service calls and hand a
//! `(template name, model)` pair to the Handlebars renderer.

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod render;
pub mod routes;
pub mod state;

use state::AppState;

/// Builds the full application router. Shared between the binary and the
/// integration tests.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::author::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
