//! API response types
//!
//! Successful responses carry the entity itself; failures carry a single
//! `error` field so that clients only need to check for its presence.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Standard error response: `{"error": "<message>"}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Pair the error body with a status code
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Errors raised by the API layer itself, before a feature handler runs
#[derive(Debug)]
pub enum ApiError {
    /// The request body or path could not be decoded
    BadRequest(String),
    /// A dependency such as the database is unreachable
    Unavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                ErrorResponse::new(message).with_status(StatusCode::BAD_REQUEST)
            },
            ApiError::Unavailable(message) => {
                tracing::error!("Service unavailable: {}", message);
                ErrorResponse::new("Service unavailable")
                    .with_status(StatusCode::SERVICE_UNAVAILABLE)
            },
        }
    }
}

/// Alias for Result with ApiError
pub type ApiResult<T> = Result<T, ApiError>;
