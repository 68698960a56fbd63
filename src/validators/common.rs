//! Common validation utilities and helpers.

use crate::errors::ApiError;

/// Require a request field to be present and non-empty.
///
/// Returns the value as given on success, or an `InvalidArgument` error
/// naming `field` otherwise.
///
/// # Example
/// ```ignore
/// let name = require_field("name", req.name.as_deref())?;
/// ```
pub fn require_field<'a>(
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::InvalidArgument { field }),
    }
}
