use crate::types::DbId;

/// Domain-level errors produced by catalog operations.
///
/// The api crate maps these onto HTTP statuses; the administrative
/// operations in `rdj-db` produce them directly.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
