//! Shared test mocks and utilities for the Bookshelf catalogue.

mod repository;

pub use repository::{EmptyAuthorRepository, FailingAuthorRepository, RecordingAuthorRepository};
