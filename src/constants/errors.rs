//! Error message constants used throughout the application.

// Request errors
pub const ERR_MALFORMED_REQUEST: &str = "Malformed request parameters";

// User errors
pub const ERR_USER_NOT_FOUND: &str = "No user found";

// Write errors
pub const ERR_INSERT_FAILED: &str = "Insert row failed";
pub const ERR_UPDATE_FAILED: &str = "Update row failed";
pub const ERR_DELETE_FAILED: &str = "Delete row failed";

// Generic errors
pub const ERR_INTERNAL: &str = "Internal server error";
