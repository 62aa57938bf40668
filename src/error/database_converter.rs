use crate::error::AppError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Utility for converting database errors to structured AppError variants.
///
/// Classification policy: `NotFound` from `.single()`-style reads surfaces
/// as 404, unique/foreign-key violations surface as 409, and everything
/// else is an opaque 500 with the operation name attached for logging.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info, operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: Box<dyn diesel::result::DatabaseErrorInformation + Send + Sync>,
        operation: &str,
    ) -> AppError {
        let message = info.message();

        match kind {
            DatabaseErrorKind::UniqueViolation => AppError::ConstraintViolation {
                message: match info.constraint_name() {
                    Some(name) => format!("Unique constraint '{}' violated", name),
                    None => format!("Unique constraint violated: {}", message),
                },
            },
            DatabaseErrorKind::ForeignKeyViolation => AppError::ConstraintViolation {
                message: match info.constraint_name() {
                    Some(name) => format!("Foreign key constraint '{}' violated", name),
                    None => format!("Foreign key constraint violated: {}", message),
                },
            },
            DatabaseErrorKind::NotNullViolation => AppError::ConstraintViolation {
                message: format!("Not-null constraint violated: {}", message),
            },
            _ => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::msg(format!("Database error: {}", message)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_conversion() {
        let error = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "lookup");
        assert!(matches!(error, AppError::NotFound { .. }));
    }

    #[test]
    fn test_unique_violation_conversion() {
        let error = DatabaseErrorConverter::convert_diesel_error(
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                Box::new("duplicate key value violates unique constraint".to_string()),
            ),
            "insert",
        );
        assert!(matches!(error, AppError::ConstraintViolation { .. }));
    }

    #[test]
    fn test_other_error_keeps_operation_context() {
        let error = DatabaseErrorConverter::convert_diesel_error(
            DieselError::RollbackTransaction,
            "batch insert",
        );
        match error {
            AppError::Database { operation, .. } => assert_eq!(operation, "batch insert"),
            other => panic!("expected Database, got {:?}", other),
        }
    }
}
