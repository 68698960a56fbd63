//! User repository for all SQL operations on the `user` table.
//!
//! Every method issues exactly one statement. Validation, id generation and
//! turning "no rows" into errors belong to the service layer.

use log::debug;
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::{UpdatedUser, UserSummary};
use crate::utils::mask_name;

/// Repository for user-related database operations.
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new UserRepository over an externally managed pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch every user without the email column.
    pub async fn find_all(&self) -> Result<Vec<UserSummary>, ApiError> {
        debug!("Repository: Listing all users");
        let users = sqlx::query_as::<_, UserSummary>(
            r#"SELECT id, name, created_at, updated_at FROM "user" ORDER BY created_at, id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Find a user by exact name.
    ///
    /// Names are not unique; when several rows match, the earliest created one
    /// wins, then the lowest id.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<UserSummary>, ApiError> {
        debug!("Repository: Finding user by name: {}", mask_name(name));
        let user = sqlx::query_as::<_, UserSummary>(
            r#"SELECT id, name, created_at, updated_at FROM "user"
               WHERE name = ?
               ORDER BY created_at, id
               LIMIT 1"#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Insert a new row. Returns the number of affected rows.
    pub async fn insert(
        &self,
        id: &str,
        name: &str,
        email: &str,
        created_at: i64,
    ) -> Result<u64, ApiError> {
        debug!("Repository: Inserting user: {}", id);
        let result = sqlx::query(
            r#"INSERT INTO "user" (id, name, email, created_at) VALUES (?, ?, ?, ?)"#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Replace name and email of the row matching `id`.
    ///
    /// `updated_at` becomes `now`, clamped so it stays strictly after
    /// `created_at` and never moves backwards. Returns `None` when no row matched.
    pub async fn update(
        &self,
        id: &str,
        name: &str,
        email: &str,
        now: i64,
    ) -> Result<Option<UpdatedUser>, ApiError> {
        debug!("Repository: Updating user: {}", id);
        let user = sqlx::query_as::<_, UpdatedUser>(
            r#"UPDATE "user"
               SET name = ?, email = ?,
                   updated_at = MAX(?, created_at + 1, COALESCE(updated_at, 0))
               WHERE id = ?
               RETURNING id, name, email, updated_at"#,
        )
        .bind(name)
        .bind(email)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Delete the row matching `id`. Returns the number of affected rows.
    pub async fn delete(&self, id: &str) -> Result<u64, ApiError> {
        debug!("Repository: Deleting user: {}", id);
        let result = sqlx::query(r#"DELETE FROM "user" WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
