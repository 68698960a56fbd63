//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Validation errors
pub const CODE_INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const CODE_MALFORMED_REQUEST: &str = "MALFORMED_REQUEST";

// User errors
pub const CODE_USER_NOT_FOUND: &str = "USER_NOT_FOUND";

// Write errors
pub const CODE_WRITE_FAILED: &str = "WRITE_FAILED";

// Generic errors
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
