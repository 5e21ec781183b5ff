/// Shared error taxonomy
///
/// Every fallible operation in the models and the mutation engine returns
/// `Result<T, DomainError>`. The API server maps each variant onto an HTTP
/// status; the `Display` output of a variant is the single-line message the
/// client sees.

use crate::auth::password::PasswordError;

/// Domain result type alias
pub type DomainResult<T> = Result<T, DomainError>;

/// Classified failure of a domain operation
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Malformed or missing input, rejected before any persistence call
    #[error("{0}")]
    Validation(String),

    /// The operation would duplicate something that must be unique
    /// (registered email, existing membership)
    #[error("{0}")]
    Conflict(String),

    /// A referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Credential check failed; the message never distinguishes an unknown
    /// email from a wrong password
    #[error("{0}")]
    Auth(String),

    /// Underlying store failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Credential hashing failure
    #[error(transparent)]
    Password(#[from] PasswordError),
}

impl DomainError {
    /// Convenience constructor for `NotFound` with a typed message
    pub fn not_found(what: &str) -> Self {
        DomainError::NotFound(format!("{what} not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_single_line() {
        let err = DomainError::Conflict("User is already a member of this board".to_string());
        assert_eq!(err.to_string(), "User is already a member of this board");

        let err = DomainError::not_found("Board");
        assert_eq!(err.to_string(), "Board not found");
    }
}
