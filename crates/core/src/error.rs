use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A uniqueness rule would be violated (e.g. email already in use).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The requested change is not permitted on an existing entity.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// The backing store failed. The message is for logs, not clients.
    #[error("Storage error: {0}")]
    Storage(String),
}
