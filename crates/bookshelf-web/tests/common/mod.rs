//! Shared test helpers for web integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use bookshelf_authors::AuthorService;
use bookshelf_core::author::NewAuthor;
use bookshelf_core::repository::AuthorRepository;
use bookshelf_store::MemAuthorRepository;
use bookshelf_web::render::TemplateEngine;
use bookshelf_web::state::AppState;

/// Build the full app router backed by `store`. Uses the same route
/// structure as `main.rs`.
pub fn build_app(store: Arc<MemAuthorRepository>) -> Router {
    let templates = Arc::new(TemplateEngine::new().expect("templates must compile"));
    let state = AppState::new(AuthorService::new(store), templates);
    bookshelf_web::app(state)
}

/// Build the app over a store seeded with one author per name; the store
/// assigns ids 1..=n in order.
pub async fn build_seeded_app(names: &[&str]) -> (Router, Arc<MemAuthorRepository>) {
    let store = Arc::new(MemAuthorRepository::new());
    for name in names {
        store.insert(NewAuthor::new(*name)).await.unwrap();
    }
    (build_app(store.clone()), store)
}

/// Send a GET request and return the full response.
pub async fn get_response(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Send a GET request and return the status plus the body as text.
pub async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
    let response = get_response(app, uri).await;
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(body_bytes.to_vec()).unwrap();

    (status, body)
}

/// Send a GET request to a redirecting endpoint and return the status plus
/// the `Location` header, if any.
pub async fn get_page_status_and_location(app: Router, uri: &str) -> (StatusCode, Option<String>) {
    let response = get_response(app, uri).await;
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_owned());

    (status, location)
}

/// Send a POST request with a urlencoded form body and return the status
/// plus the `Location` header, if any.
pub async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, Option<String>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_owned());

    (status, location)
}
