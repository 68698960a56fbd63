//! Application constants module.
//!
//! This module centralizes the constant strings used throughout the application:
//! error codes, error messages and success messages.

pub mod error_codes;
pub mod errors;
pub mod messages;

pub use error_codes::*;
pub use errors::*;
pub use messages::*;
