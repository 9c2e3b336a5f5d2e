//! PostgreSQL persistence layer: pool construction, migrations, row models,
//! and per-aggregate repositories.
//!
//! Write-path repository methods take `&mut PgConnection` so the service
//! layer controls transaction boundaries; read-path methods take `&PgPool`.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Shared connection pool alias used across the workspace.
pub type DbPool = PgPool;

/// Connect to Postgres with sane pool defaults.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Run all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Cheap connectivity probe used by the health endpoint.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
