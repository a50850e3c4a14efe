//! Shared validation utilities
//!
//! Required text fields must be present and contain something other than
//! whitespace; required references must be present. Existence of the
//! referenced row is checked by the handler against the database.
//!
//! ```rust,ignore
//! use cosmic_server::features::shared::validation::required_text;
//!
//! let name = required_text(command.name.as_deref(), "name")?;
//! ```

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// A single field failed validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },
}

/// Require a non-blank text value, returning it unchanged
pub fn required_text<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, FieldValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(FieldValidationError::Required { field }),
    }
}

/// Require a reference id to be present
pub fn required_id(value: Option<i64>, field: &'static str) -> Result<i64, FieldValidationError> {
    value.ok_or(FieldValidationError::Required { field })
}

/// Deserialize a PATCH field so that "absent" and "null" stay distinguishable
///
/// Use with `#[serde(default, deserialize_with = "patch_field")]` on an
/// `Option<Option<T>>`: a missing key stays `None`, `null` becomes
/// `Some(None)` and a value becomes `Some(Some(value))`.
pub fn patch_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
