//! User service: validation, id/timestamp assignment and failure
//! classification for the five user operations.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::errors::{ApiError, WriteOperation};
use crate::models::{
    CreateUserRequest, CreatedUser, DeleteUserRequest, DeletedUser, UpdateUserRequest,
    UpdatedUser, UserSummary,
};
use crate::repositories::UserRepository;
use crate::services::{Clock, IdGenerator};
use crate::utils::{mask_email, mask_name};
use crate::validators::{validate_create, validate_delete, validate_update};

pub struct UserService {
    repository: Arc<UserRepository>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl UserService {
    pub fn new(
        repository: Arc<UserRepository>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            ids,
            clock,
        }
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        let users = self.repository.find_all().await?;
        debug!("Listed {} users", users.len());
        Ok(users)
    }

    pub async fn get_user_by_name(&self, name: &str) -> Result<UserSummary, ApiError> {
        self.repository.find_by_name(name).await?.ok_or_else(|| {
            warn!("User not found with name: {}", mask_name(name));
            ApiError::NotFound {
                name: name.to_string(),
            }
        })
    }

    pub async fn create_user(&self, req: CreateUserRequest) -> Result<CreatedUser, ApiError> {
        let fields = validate_create(&req)?;

        let user = CreatedUser {
            id: self.ids.generate(),
            name: fields.name.to_string(),
            email: fields.email.to_string(),
            created_at: self.clock.now(),
        };

        let affected = self
            .repository
            .insert(&user.id, &user.name, &user.email, user.created_at)
            .await?;
        if affected == 0 {
            warn!("Insert affected no rows for user {}", user.id);
            return Err(ApiError::WriteFailure {
                operation: WriteOperation::Insert,
                id: user.id,
            });
        }

        info!("Created user {} ({})", user.id, mask_email(&user.email));
        Ok(user)
    }

    pub async fn update_user(&self, req: UpdateUserRequest) -> Result<UpdatedUser, ApiError> {
        let fields = validate_update(&req)?;
        let now = self.clock.now();

        match self
            .repository
            .update(fields.id, fields.name, fields.email, now)
            .await?
        {
            Some(user) => {
                info!("Updated user {} ({})", user.id, mask_email(&user.email));
                Ok(user)
            }
            None => {
                warn!("Update failed: no user with id {}", fields.id);
                Err(ApiError::WriteFailure {
                    operation: WriteOperation::Update,
                    id: fields.id.to_string(),
                })
            }
        }
    }

    pub async fn delete_user(&self, req: DeleteUserRequest) -> Result<DeletedUser, ApiError> {
        let id = validate_delete(&req)?;

        if self.repository.delete(id).await? == 0 {
            warn!("Delete failed: no user with id {}", id);
            return Err(ApiError::WriteFailure {
                operation: WriteOperation::Delete,
                id: id.to_string(),
            });
        }

        info!("Deleted user {}", id);
        Ok(DeletedUser { id: id.to_string() })
    }
}
