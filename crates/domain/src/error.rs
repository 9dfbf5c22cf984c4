//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`BandError`]
//! via `#[from]` or an explicit `From` impl.

use crate::id::TaskId;

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum BandError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// An outbound call to an external service failed.
    #[error("upstream error")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("name must not exceed {max} characters")]
    NameTooLong { max: usize },

    #[error("band member names must not be empty")]
    EmptyMemberName,

    #[error("task titles must not be empty")]
    EmptyTaskTitle,

    #[error("task id {0} is used more than once")]
    DuplicateTaskId(TaskId),

    #[error("a band named {0:?} already exists")]
    DuplicateName(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_band_error() {
        let err: BandError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            BandError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_describe_missing_record() {
        let err = NotFoundError {
            entity: "Band",
            id: "3".to_string(),
        };
        assert_eq!(err.to_string(), "Band 3 not found");
    }
}
