//! Repository for clients, contacts, and the per-project client mapping.

use sqlx::{PgConnection, PgPool};
use stafflane_core::types::DbId;

use crate::models::client::{Client, ClientContact, ProjectClientMap};

pub struct ClientRepo;

impl ClientRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        sqlx::query_as::<_, Client>("SELECT id, name FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_contact(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ClientContact>, sqlx::Error> {
        sqlx::query_as::<_, ClientContact>(
            "SELECT id, client_id, name, email FROM client_contacts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Replace the single client mapping for a project.
    pub async fn set_project_client(
        conn: &mut PgConnection,
        project_id: DbId,
        client_id: DbId,
        stakeholder_id: Option<DbId>,
    ) -> Result<ProjectClientMap, sqlx::Error> {
        sqlx::query_as::<_, ProjectClientMap>(
            "INSERT INTO project_client_map (project_id, client_id, stakeholder_id)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_client_map_project DO UPDATE SET
                client_id = EXCLUDED.client_id,
                stakeholder_id = EXCLUDED.stakeholder_id
             RETURNING id, project_id, client_id, stakeholder_id",
        )
        .bind(project_id)
        .bind(client_id)
        .bind(stakeholder_id)
        .fetch_one(conn)
        .await
    }

    pub async fn get_project_client(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<ProjectClientMap>, sqlx::Error> {
        sqlx::query_as::<_, ProjectClientMap>(
            "SELECT id, project_id, client_id, stakeholder_id FROM project_client_map
             WHERE project_id = $1",
        )
        .bind(project_id)
        .fetch_optional(pool)
        .await
    }
}
