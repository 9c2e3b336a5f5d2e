use crate::types::DbId;

/// Domain-level error type shared by the repository and API layers.
///
/// `Validation` is the single user-visible error kind for bad requests
/// (missing cross-field values, nonexistent referenced entities, stage
/// values outside the allow-list). The HTTP layer maps each variant to a
/// status code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A request-level validation failure with a human-readable message.
    #[error("{0}")]
    Validation(String),

    /// The operation conflicts with existing state.
    #[error("{0}")]
    Conflict(String),

    /// The caller is not authenticated.
    #[error("{0}")]
    Unauthorized(String),

    /// The caller is authenticated but not permitted (e.g. editing
    /// another admin's note).
    #[error("{0}")]
    Forbidden(String),

    /// An internal invariant was broken.
    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        CoreError::Validation(msg.into())
    }
}
