//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Absence of a record is not an error; lookups report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// A storage/persistence error.
    #[error("storage error: {0}")]
    Storage(String),
}
