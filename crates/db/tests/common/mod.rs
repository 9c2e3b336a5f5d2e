//! Shared fixtures for the db integration tests.

use sqlx::PgPool;
use stafflane_core::types::DbId;
use stafflane_db::models::project::ProjectFields;
use stafflane_db::repositories::project_repo::ProjectRepo;

pub async fn insert_admin(pool: &PgPool, name: &str, email: &str) -> DbId {
    let row: (DbId,) =
        sqlx::query_as("INSERT INTO admins (name, email) VALUES ($1, $2) RETURNING id")
            .bind(name)
            .bind(email)
            .fetch_one(pool)
            .await
            .unwrap();
    row.0
}

pub async fn insert_client(pool: &PgPool, name: &str) -> DbId {
    let row: (DbId,) = sqlx::query_as("INSERT INTO clients (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

pub async fn insert_freelancer(pool: &PgPool, name: &str, email: &str) -> DbId {
    let row: (DbId,) =
        sqlx::query_as("INSERT INTO freelancers (name, email) VALUES ($1, $2) RETURNING id")
            .bind(name)
            .bind(email)
            .fetch_one(pool)
            .await
            .unwrap();
    row.0
}

/// Create a bare project owned by a fresh admin, returning (admin_id, project_id).
pub async fn insert_project(pool: &PgPool, name: &str) -> (DbId, DbId) {
    let admin_id = insert_admin(pool, "Fixture Admin", &format!("{name}@fixture.test")).await;
    let fields = ProjectFields {
        name: Some(name.to_string()),
        ..Default::default()
    };
    let mut tx = pool.begin().await.unwrap();
    let project = ProjectRepo::create(&mut *tx, admin_id, &fields)
        .await
        .unwrap();
    tx.commit().await.unwrap();
    (admin_id, project.id)
}
