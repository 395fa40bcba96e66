//! Bookshelf Core — shared domain types for the author catalogue.
//!
//! This crate defines the entities, errors, and repository trait that the
//! service and web layers depend on. It contains no infrastructure code.

pub mod author;
pub mod error;
pub mod repository;
