//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

use crate::validation::FieldError;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Validation failed: {}", FieldError::join(.0))]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    pub fn post_not_found(id: Uuid) -> Self {
        Self::NotFound {
            entity_type: "Post",
            id,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_message() {
        let err = DomainError::Validation(vec![
            FieldError::new("title", "Title is required"),
            FieldError::new("author", "Author is required"),
        ]);

        assert_eq!(
            err.to_string(),
            "Validation failed: Title is required, Author is required"
        );
    }

    #[test]
    fn repo_errors_pass_through() {
        let err = DomainError::from(RepoError::Query("timeout".into()));
        assert_eq!(err.to_string(), "Query execution failed: timeout");
    }
}
