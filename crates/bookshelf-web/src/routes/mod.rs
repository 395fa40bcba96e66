//! Route modules for the catalogue pages.

pub mod author;
pub mod health;
