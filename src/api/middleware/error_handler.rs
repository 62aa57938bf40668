//! Error handler converting `AppError` into HTTP responses.
//!
//! Every route returns the same tagged body shape on failure: a stable
//! `code`, a human-readable `message`, and optional `details`. Internal
//! sources (database, configuration) are logged and sanitized before they
//! leave the process.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        let code = error_to_code(&self);

        let error_response = match &self {
            AppError::MissingField { message }
            | AppError::InvalidFormat { message }
            | AppError::InvalidReference { message }
            | AppError::BadRequest { message }
            | AppError::Unauthorized { message }
            | AppError::Forbidden { message }
            | AppError::ConstraintViolation { message } => ErrorResponse::new(code, message),
            AppError::NotFound {
                entity,
                field,
                value,
            } => ErrorResponse::new(
                code,
                &format!("Resource not found: {} with {}={}", entity, field, value),
            ),
            AppError::Validation { field, reason } => {
                ErrorResponse::new(code, &format!("Validation failed for {}: {}", field, reason))
            }
            AppError::Database { operation, source } => {
                error!(operation = %operation, error = %source, "Database operation failed");
                ErrorResponse::new(code, "A storage error occurred").with_details(operation)
            }
            AppError::Configuration { key, source } => {
                error!(key = %key, error = %source, "Configuration error");
                ErrorResponse::new(code, &format!("Configuration error: {}", key))
            }
            AppError::ConnectionPool { source } => {
                error!(error = %source, "Connection pool error");
                ErrorResponse::new(code, "Database connection unavailable")
            }
            AppError::Internal { source } => {
                error!(error = %source, "Internal error");
                ErrorResponse::new(code, "An internal error occurred")
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Maps an `AppError` variant to its HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::MissingField { .. } => StatusCode::BAD_REQUEST,
        AppError::InvalidFormat { .. } => StatusCode::BAD_REQUEST,
        AppError::InvalidReference { .. } => StatusCode::BAD_REQUEST,
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
        AppError::ConstraintViolation { .. } => StatusCode::CONFLICT,
        AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps an `AppError` variant to its stable error code string.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::MissingField { .. } => "MISSING_FIELD",
        AppError::InvalidFormat { .. } => "INVALID_FORMAT",
        AppError::InvalidReference { .. } => "INVALID_REFERENCE",
        AppError::NotFound { .. } => "NOT_FOUND",
        AppError::Validation { .. } => "VALIDATION_ERROR",
        AppError::BadRequest { .. } => "BAD_REQUEST",
        AppError::Unauthorized { .. } => "UNAUTHORIZED",
        AppError::Forbidden { .. } => "FORBIDDEN",
        AppError::ConstraintViolation { .. } => "CONSTRAINT_VIOLATION",
        AppError::Database { .. } => "STORAGE_ERROR",
        AppError::Configuration { .. } => "CONFIGURATION_ERROR",
        AppError::ConnectionPool { .. } => "SERVICE_UNAVAILABLE",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_is_bad_request() {
        let error = AppError::MissingField {
            message: "coach_id is required".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
        assert_eq!(error_to_code(&error), "MISSING_FIELD");
    }

    #[test]
    fn test_invalid_reference_is_bad_request_not_404() {
        let error = AppError::InvalidReference {
            message: "Invalid player_id".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
        assert_eq!(error_to_code(&error), "INVALID_REFERENCE");
    }

    #[test]
    fn test_not_found_status() {
        let error = AppError::NotFound {
            entity: "coach".to_string(),
            field: "id".to_string(),
            value: "9".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_constraint_violation_is_conflict() {
        let error = AppError::ConstraintViolation {
            message: "duplicate key".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::CONFLICT);
    }

    #[test]
    fn test_pool_error_is_service_unavailable() {
        let error = AppError::ConnectionPool {
            source: anyhow::anyhow!("pool exhausted"),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_database_error_response_sanitized() {
        let error = AppError::Database {
            operation: "insert cart item".to_string(),
            source: anyhow::anyhow!("connection reset with credentials in message"),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_unauthorized_body_shape() {
        let error = AppError::Unauthorized {
            message: "Missing authorization header".to_string(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "UNAUTHORIZED");
        assert_eq!(json["message"], "Missing authorization header");
    }
}
