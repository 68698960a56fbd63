//! Success message constants used throughout the application.

pub const MSG_USERS_LISTED: &str = "Users retrieved";
pub const MSG_USER_FOUND: &str = "User found";
pub const MSG_USER_CREATED: &str = "User created successfully";
pub const MSG_USER_UPDATED: &str = "User updated successfully";
pub const MSG_USER_DELETED: &str = "User deleted successfully";
