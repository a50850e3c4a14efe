//! Request extractors with JSON error bodies
//!
//! axum's stock `Json` and `Path` extractors reject bad input with plain-text
//! bodies and, for JSON type mismatches, a 422 status. These wrappers turn
//! every decoding failure into a 400 with the standard `{"error": ...}` body.

use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    FromRequest, FromRequestParts,
};

use super::response::ApiError;

/// JSON body extractor; rejections become `400 {"error": ...}`
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor; rejections become `400 {"error": ...}`
#[derive(Debug, Clone, Copy, Default, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest("Invalid request body".to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected path parameter");
        ApiError::BadRequest("Invalid path parameter".to_string())
    }
}
