//! Session-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, SessionId, ValidationError};

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Session was not found.
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    /// Validation failed.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }
}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::validation(err.field().to_string(), err.to_string())
    }
}

/// Port failures are always infrastructure failures; input is validated
/// before it reaches a repository.
impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        SessionError::infrastructure(err.to_string())
    }
}
