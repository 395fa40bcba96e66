//! Bookshelf Authors — the domain facade for the author catalogue.

pub mod service;

pub use service::AuthorService;
