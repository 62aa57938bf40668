use crate::error::DatabaseErrorConverter;
use thiserror::Error;

/// Application-wide error type covering every failure the API can surface.
///
/// Validation failures are detected and reported before any storage call is
/// made; storage failures are classified by the database converter instead
/// of being collapsed into a single status code.
#[derive(Error, Debug)]
pub enum AppError {
    /// One or more required request fields are absent
    #[error("Missing required field: {message}")]
    MissingField { message: String },

    /// A date, time, or slot value does not match the expected shape
    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    /// A supplied reference points at a row the caller does not own
    #[error("Invalid reference: {message}")]
    InvalidReference { message: String },

    /// Resource not found error with entity, field, and value information
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Field-level validation error from request DTO constraints
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Unauthenticated access error (missing/invalid/expired token)
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Forbidden access error with authorization message
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// Storage-level constraint violation (unique key, foreign key)
    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error, "database operation")
    }
}

impl From<diesel_async::pooled_connection::bb8::RunError> for AppError {
    fn from(error: diesel_async::pooled_connection::bb8::RunError) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::from(error),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Report the first field error; the derive macro guarantees at
        // least one when validation fails.
        for (field, field_errors) in errors.field_errors() {
            if let Some(error) = field_errors.first() {
                let reason = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value for {}", field));
                return AppError::Validation {
                    field: field.to_string(),
                    reason,
                };
            }
        }
        AppError::BadRequest {
            message: "Request validation failed".to_string(),
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let error = AppError::MissingField {
            message: "session_type, coach_id, session_date and session_time are required"
                .to_string(),
        };
        assert!(error.to_string().contains("session_type"));
    }

    #[test]
    fn test_diesel_not_found_maps_to_not_found() {
        let error = AppError::from(diesel::result::Error::NotFound);
        assert!(matches!(error, AppError::NotFound { .. }));
    }

    #[test]
    fn test_validator_errors_report_first_field() {
        use validator::Validate;

        #[derive(Validate)]
        struct Form {
            #[validate(length(min = 2, message = "too short"))]
            name: String,
        }

        let form = Form {
            name: "x".to_string(),
        };
        let error = AppError::from(form.validate().unwrap_err());
        match error {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "name");
                assert_eq!(reason, "too short");
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }
}
