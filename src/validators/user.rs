//! Field checks for user requests, in the order they are reported.

use crate::errors::ApiError;
use crate::models::{CreateUserRequest, DeleteUserRequest, UpdateUserRequest};

use super::require_field;

pub struct NewUserFields<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

pub struct UserChangeFields<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
}

/// Name first, then email.
pub fn validate_create(req: &CreateUserRequest) -> Result<NewUserFields<'_>, ApiError> {
    Ok(NewUserFields {
        name: require_field("name", req.name.as_deref())?,
        email: require_field("email", req.email.as_deref())?,
    })
}

/// Id first, then name, then email.
pub fn validate_update(req: &UpdateUserRequest) -> Result<UserChangeFields<'_>, ApiError> {
    Ok(UserChangeFields {
        id: require_field("id", req.id.as_deref())?,
        name: require_field("name", req.name.as_deref())?,
        email: require_field("email", req.email.as_deref())?,
    })
}

pub fn validate_delete(req: &DeleteUserRequest) -> Result<&str, ApiError> {
    require_field("id", req.id.as_deref())
}
