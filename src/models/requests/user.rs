//! User-related request models.
//!
//! Every field is optional at the wire level: a missing field and a blank one
//! are both reported as an invalid argument naming that field.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request payload for creating a user
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Alice")]
    pub name: Option<String>,
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
}

/// Request payload for replacing a user's name and email
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(example = "6f1c2a3e-8d4b-11ef-9c2e-0242ac120002")]
    pub id: Option<String>,
    #[schema(example = "Alicia")]
    pub name: Option<String>,
    #[schema(example = "alicia@example.com")]
    pub email: Option<String>,
}

/// Request payload for deleting a user
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DeleteUserRequest {
    #[schema(example = "6f1c2a3e-8d4b-11ef-9c2e-0242ac120002")]
    pub id: Option<String>,
}
