//! SQLite pool construction and schema bootstrap.

use std::str::FromStr;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Embedded schema statements, applied in order on startup.
const MIGRATIONS: &[&str] = &[include_str!("../../migrations/0001_create_user.sql")];

/// Open a connection pool, creating the database file if it does not exist.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Apply the embedded schema. Every statement is idempotent.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for migration in MIGRATIONS {
        sqlx::raw_sql(migration).execute(pool).await?;
    }
    info!("Database schema is up to date");
    Ok(())
}

/// Single-connection in-memory database with the schema applied.
#[cfg(test)]
pub async fn in_memory() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    run_migrations(&pool)
        .await
        .expect("Failed to apply schema");

    pool
}
