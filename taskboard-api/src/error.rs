/// Error handling for the API server
///
/// A unified error type that maps the domain taxonomy onto HTTP responses.
/// Handlers return `Result<T, ApiError>`; the `Display` message of a variant
/// is exactly the single-line `error` string a client sees. Status mapping:
/// bad input, conflicts, and failed credentials are all 400 (the API never
/// distinguishes them by status), unknown ids are 404, everything else is a
/// masked 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use taskboard_shared::error::DomainError;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed input (400)
    BadRequest(String),

    /// Schema validation failure with field-level messages (400)
    Validation(Vec<FieldError>),

    /// Duplicate email or membership (400)
    Conflict(String),

    /// Unknown id (404)
    NotFound(String),

    /// Failed credential check (400)
    Auth(String),

    /// Anything unclassified (500); the message is logged, never exposed
    Internal(String),
}

/// Field-level validation error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Field that failed validation
    pub field: String,

    /// Error message
    pub message: String,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,

    /// Field-level messages, present only for schema validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::Conflict(msg)
            | ApiError::NotFound(msg)
            | ApiError::Auth(msg)
            | ApiError::Internal(msg) => write!(f, "{}", msg),
            ApiError::Validation(errors) => {
                write!(f, "Validation failed: {} errors", errors.len())
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Converts validator output into the field-level response shape
    pub fn from_validation(errors: validator::ValidationErrors) -> Self {
        let details: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| FieldError {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        ApiError::Validation(details)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            ApiError::BadRequest(msg) | ApiError::Conflict(msg) | ApiError::Auth(msg) => {
                (StatusCode::BAD_REQUEST, msg, None)
            }
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Invalid input".to_string(),
                Some(errors),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::Internal(msg) => {
                // Log the cause but never expose it
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            details,
        });

        (status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => ApiError::BadRequest(msg),
            DomainError::Conflict(msg) => ApiError::Conflict(msg),
            DomainError::NotFound(msg) => ApiError::NotFound(msg),
            DomainError::Auth(msg) => ApiError::Auth(msg),
            DomainError::Database(err) => ApiError::Internal(err.to_string()),
            DomainError::Password(err) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_the_client_message() {
        let err = ApiError::Auth("Invalid email or password".to_string());
        assert_eq!(err.to_string(), "Invalid email or password");

        let err = ApiError::NotFound("Board not found".to_string());
        assert_eq!(err.to_string(), "Board not found");
    }

    #[test]
    fn test_details_omitted_when_absent() {
        let body = ErrorResponse {
            error: "Board not found".to_string(),
            details: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Board not found"}"#);
    }
}
