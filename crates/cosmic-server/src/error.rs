//! Server-specific error types
//!
//! Request-level failures are typed per operation inside each feature; this
//! module covers what can go wrong while starting and running the server.

use thiserror::Error;

use crate::db::DbError;

/// Result type alias for server operations
pub type ServerResult<T> = std::result::Result<T, ServerError>;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
