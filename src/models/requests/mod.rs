//! Request models for API endpoints.

pub mod user;

pub use user::*;
