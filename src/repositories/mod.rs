//! Repository layer for database operations.
//!
//! This module keeps SQL out of the service layer: services decide what an
//! operation means, repositories decide how it is stored.

pub mod user_repository;

pub use user_repository::UserRepository;
