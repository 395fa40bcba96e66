//! Routes for the author catalogue pages.
//!
//! Handlers are pure translation: parse the request, call the service,
//! bind the result into a view, and let the template engine render it.
//! No business rules live here.

use axum::extract::{Form, Path, State};
use axum::response::{Html, Redirect};
use axum::{Router, routing::get, routing::post};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use bookshelf_core::author::{Author, AuthorId, NewAuthor};

use crate::error::PageError;
use crate::render::{self, View};
use crate::state::AppState;

/// Form body shared by the create and update pages.
#[derive(Debug, Deserialize)]
pub struct AuthorForm {
    /// Author display name.
    pub name: String,
}

fn list_authors_view(authors: &[Author]) -> View {
    View::new(render::LIST_AUTHORS, json!({ "authors": authors }))
}

fn author_view(author: &Author) -> View {
    View::new(render::LIST_AUTHOR, json!({ "author": author }))
}

fn add_author_view() -> View {
    View::new(render::ADD_AUTHOR, json!({}))
}

fn update_author_view(author: &Author) -> View {
    View::new(render::UPDATE_AUTHOR, json!({ "author": author }))
}

/// GET /authors
#[instrument(skip(state))]
async fn list_authors(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let authors = state.authors.find_all_authors().await?;
    let page = state.templates.render(&list_authors_view(&authors))?;
    Ok(Html(page))
}

/// GET /author/{id}
#[instrument(skip(state))]
async fn find_author(
    State(state): State<AppState>,
    Path(id): Path<AuthorId>,
) -> Result<Html<String>, PageError> {
    let author = state
        .authors
        .find_author_by_id(id)
        .await?
        .ok_or(PageError::NotFound)?;
    let page = state.templates.render(&author_view(&author))?;
    Ok(Html(page))
}

/// GET /addAuthor
#[instrument(skip(state))]
async fn show_add_author_form(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let page = state.templates.render(&add_author_view())?;
    Ok(Html(page))
}

/// POST /createAuthor
#[instrument(skip(state, form))]
async fn create_author(
    State(state): State<AppState>,
    Form(form): Form<AuthorForm>,
) -> Result<Redirect, PageError> {
    let author = state.authors.create_author(NewAuthor::new(form.name)).await?;

    info!(author_id = author.id, "created author");

    Ok(Redirect::to("/authors"))
}

/// GET /updateAuthor/{id}
#[instrument(skip(state))]
async fn show_update_author_form(
    State(state): State<AppState>,
    Path(id): Path<AuthorId>,
) -> Result<Html<String>, PageError> {
    let author = state
        .authors
        .find_author_by_id(id)
        .await?
        .ok_or(PageError::NotFound)?;
    let page = state.templates.render(&update_author_view(&author))?;
    Ok(Html(page))
}

/// POST /updateAuthor/{id}
#[instrument(skip(state, form))]
async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<AuthorId>,
    Form(form): Form<AuthorForm>,
) -> Result<Redirect, PageError> {
    state
        .authors
        .update_author(Author::new(id, form.name))
        .await?
        .ok_or(PageError::NotFound)?;

    info!(author_id = id, "updated author");

    Ok(Redirect::to("/authors"))
}

/// GET /deleteAuthor/{id}
#[instrument(skip(state))]
async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<AuthorId>,
) -> Result<Redirect, PageError> {
    if !state.authors.delete_author(id).await? {
        return Err(PageError::NotFound);
    }

    info!(author_id = id, "deleted author");

    Ok(Redirect::to("/authors"))
}

/// Returns the router for the author pages.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/authors", get(list_authors))
        .route("/author/{id}", get(find_author))
        .route("/addAuthor", get(show_add_author_form))
        .route("/createAuthor", post(create_author))
        .route(
            "/updateAuthor/{id}",
            get(show_update_author_form).post(update_author),
        )
        .route("/deleteAuthor/{id}", get(delete_author))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use bookshelf_authors::AuthorService;
    use bookshelf_core::repository::AuthorRepository;
    use bookshelf_test_support::{
        EmptyAuthorRepository, FailingAuthorRepository, RecordingAuthorRepository,
    };
    use tower::ServiceExt;

    use crate::render::TemplateEngine;

    fn app_state_with(repository: Arc<dyn AuthorRepository>) -> AppState {
        let templates = Arc::new(TemplateEngine::new().unwrap());
        AppState::new(AuthorService::new(repository), templates)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_list_authors_view_selects_template_and_binds_authors() {
        let authors = vec![Author::new(1, "Author One"), Author::new(2, "Author Two")];

        let view = list_authors_view(&authors);

        assert_eq!(view.template, "list-authors");
        assert_eq!(view.model["authors"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_author_view_selects_template_and_binds_author() {
        let author = Author::new(1, "Some Author");

        let view = author_view(&author);

        assert_eq!(view.template, "list-author");
        assert_eq!(view.model["author"]["name"], "Some Author");
    }

    #[tokio::test]
    async fn test_find_author_returns_200_html_page() {
        // Arrange
        let repository = Arc::new(RecordingAuthorRepository::new(vec![Author::new(
            1,
            "Some Author",
        )]));
        let app = router().with_state(app_state_with(repository));

        let request = Request::builder()
            .method("GET")
            .uri("/author/1")
            .body(Body::empty())
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert!(body_string(response).await.contains("Some Author"));
    }

    #[tokio::test]
    async fn test_find_author_returns_404_for_unknown_id() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(EmptyAuthorRepository)));

        let request = Request::builder()
            .method("GET")
            .uri("/author/999")
            .body(Body::empty())
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_authors_returns_500_when_repository_fails() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(FailingAuthorRepository)));

        let request = Request::builder()
            .method("GET")
            .uri("/authors")
            .body(Body::empty())
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_create_author_redirects_to_the_author_list() {
        // Arrange
        let repository = Arc::new(RecordingAuthorRepository::new(vec![]));
        let app = router().with_state(app_state_with(repository.clone()));

        let request = Request::builder()
            .method("POST")
            .uri("/createAuthor")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=New+Author"))
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/authors");
        assert_eq!(
            repository.inserted_authors(),
            vec![NewAuthor::new("New Author")]
        );
    }

    #[tokio::test]
    async fn test_create_author_rejects_blank_name() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(EmptyAuthorRepository)));

        let request = Request::builder()
            .method("POST")
            .uri("/createAuthor")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name="))
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
