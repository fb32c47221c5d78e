//! Validation helpers shared by content entities.

use super::ContentValidationError;
use crate::domain::slug::is_valid_slug;

pub(super) fn validate_slug(
    value: String,
    field: &'static str,
) -> Result<String, ContentValidationError> {
    if !is_valid_slug(&value) {
        return Err(ContentValidationError::InvalidSlug { field });
    }
    Ok(value)
}

pub(super) fn validate_non_empty_field(
    value: String,
    field: &'static str,
) -> Result<String, ContentValidationError> {
    if value.trim().is_empty() {
        return Err(ContentValidationError::EmptyField { field });
    }
    Ok(value)
}

/// Collapse blank optional text to `None` so storage never holds empty strings.
pub(super) fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
