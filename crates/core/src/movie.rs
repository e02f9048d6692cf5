//! Field rules for movie records.
//!
//! Presence of each field is enforced by the request DTOs; this module only
//! covers what serde cannot express: required text must not be blank.

use crate::error::CoreError;

/// Entity name used in error messages.
pub const ENTITY: &str = "movie";

/// Reject an empty or whitespace-only value for a required text field.
pub fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Same as [`require_text`] for a field that may be absent from a partial update.
/// Absent fields are accepted; present ones must not be blank.
pub fn require_text_if_present(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) => require_text(field, v),
        None => Ok(()),
    }
}
