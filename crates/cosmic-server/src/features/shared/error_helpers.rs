//! Database error handling utilities
//!
//! Classifies `sqlx` errors into the constraint violations the schema can
//! raise, so handlers can map them onto their own error types.
//!
//! ```rust,ignore
//! use cosmic_server::features::shared::error_helpers::map_unique_violation;
//!
//! sqlx::query(...)
//!     .execute(&pool)
//!     .await
//!     .map_err(|e| {
//!         map_unique_violation(
//!             e,
//!             CreateScientistError::DuplicateName,
//!             CreateScientistError::Database,
//!         )
//!     })?;
//! ```

use sqlx::Error as SqlxError;

/// Result of checking for a database constraint violation
#[derive(Debug)]
pub enum ConstraintViolation {
    /// A unique constraint was violated
    UniqueViolation,
    /// A foreign key constraint was violated
    ForeignKeyViolation,
    /// No constraint violation - some other error occurred
    Other(SqlxError),
}

/// Check the type of database constraint violation
pub fn check_constraint_violation(error: SqlxError) -> ConstraintViolation {
    if let SqlxError::Database(ref db_err) = error {
        if db_err.is_unique_violation() {
            return ConstraintViolation::UniqueViolation;
        }
        if db_err.is_foreign_key_violation() {
            return ConstraintViolation::ForeignKeyViolation;
        }
    }
    ConstraintViolation::Other(error)
}

/// Check if the error is a unique constraint violation
pub fn is_unique_violation(error: &SqlxError) -> bool {
    if let SqlxError::Database(db_err) = error {
        return db_err.is_unique_violation();
    }
    false
}

/// Check if the error is a foreign key violation
pub fn is_foreign_key_violation(error: &SqlxError) -> bool {
    if let SqlxError::Database(db_err) = error {
        return db_err.is_foreign_key_violation();
    }
    false
}

/// Map a unique violation to `unique_error`, anything else through `default_wrapper`
pub fn map_unique_violation<E, F>(error: SqlxError, unique_error: E, default_wrapper: F) -> E
where
    F: FnOnce(SqlxError) -> E,
{
    if is_unique_violation(&error) {
        unique_error
    } else {
        default_wrapper(error)
    }
}

/// Map unique and foreign key violations to their own errors
pub fn map_constraint_violation<E, F>(
    error: SqlxError,
    unique_error: E,
    fk_error: E,
    default_wrapper: F,
) -> E
where
    F: FnOnce(SqlxError) -> E,
{
    match check_constraint_violation(error) {
        ConstraintViolation::UniqueViolation => unique_error,
        ConstraintViolation::ForeignKeyViolation => fk_error,
        ConstraintViolation::Other(e) => default_wrapper(e),
    }
}
