//! Typed views of the `user` table.
//!
//! Every operation returns its own shape instead of one struct with optional
//! fields, so the columns a response carries are fixed by its type.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Projection used by listing and lookup by name. Email is never exposed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserSummary {
    #[schema(example = "6f1c2a3e-8d4b-11ef-9c2e-0242ac120002")]
    pub id: String,
    #[schema(example = "Alice")]
    pub name: String,
    /// Seconds since the Unix epoch
    #[schema(example = 1729324800)]
    pub created_at: i64,
    /// Null until the first update
    #[schema(example = json!(null))]
    pub updated_at: Option<i64>,
}

/// Record returned after a successful insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: i64,
}

/// Record returned after a successful update. Carries no `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UpdatedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeletedUser {
    pub id: String,
}
