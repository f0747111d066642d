//! Storage error types.

use iqsf_model::ValidationError;

/// Storage error.
///
/// Absence of a record is not an error: lookups return `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Insert payload failed schema validation.
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),

    /// A unique field is already taken.
    #[error("{entity} with this {field} already exists")]
    Conflict {
        entity: &'static str,
        field: &'static str,
    },

    /// Backend failure (lock, I/O, database).
    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create a backend error from any error type.
    #[inline]
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        Self::Backend(err.to_string())
    }

    #[inline]
    pub(crate) fn conflict(entity: &'static str, field: &'static str) -> Self {
        Self::Conflict { entity, field }
    }
}
