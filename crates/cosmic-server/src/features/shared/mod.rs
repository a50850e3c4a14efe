//! Shared utilities and types for feature modules
//!
//! - **validation**: field validation and PATCH-body helpers
//! - **error_helpers**: database constraint-violation classification
//! - **test_helpers**: test fixtures (test-only)

pub mod error_helpers;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use validation::{required_id, required_text, FieldValidationError};
