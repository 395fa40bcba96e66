//! Bookshelf Store — repository implementations for the author catalogue.

pub mod mem_author_repository;

pub use mem_author_repository::MemAuthorRepository;
