//! Repositories for the project team / director / stakeholder join sets.
//!
//! Each set is rebuilt in full on every project edit: the stored set is
//! cleared and the supplied IDs re-inserted, so an omitted set empties.

use sqlx::{PgConnection, PgPool};
use stafflane_core::types::DbId;

use crate::models::admin::Admin;
use crate::models::client::ClientContact;

pub struct MembershipRepo;

impl MembershipRepo {
    /// Replace the team-member set.
    pub async fn replace_members(
        conn: &mut PgConnection,
        project_id: DbId,
        member_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_team_members WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *conn)
            .await?;
        for member_id in member_ids {
            sqlx::query(
                "INSERT INTO project_team_members (project_id, member_id) VALUES ($1, $2)
                 ON CONFLICT ON CONSTRAINT uq_project_member DO NOTHING",
            )
            .bind(project_id)
            .bind(member_id)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    /// Replace the director set.
    pub async fn replace_directors(
        conn: &mut PgConnection,
        project_id: DbId,
        director_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_directors WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *conn)
            .await?;
        for director_id in director_ids {
            sqlx::query(
                "INSERT INTO project_directors (project_id, director_id) VALUES ($1, $2)
                 ON CONFLICT ON CONSTRAINT uq_project_director DO NOTHING",
            )
            .bind(project_id)
            .bind(director_id)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    /// Replace the stakeholder (client contact) set.
    pub async fn replace_stakeholders(
        conn: &mut PgConnection,
        project_id: DbId,
        stakeholder_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_stakeholders WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *conn)
            .await?;
        for stakeholder_id in stakeholder_ids {
            sqlx::query(
                "INSERT INTO project_stakeholders (project_id, stakeholder_id) VALUES ($1, $2)
                 ON CONFLICT ON CONSTRAINT uq_project_stakeholder DO NOTHING",
            )
            .bind(project_id)
            .bind(stakeholder_id)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    /// Current team-member IDs, read inside the resourcing transaction to
    /// diff against the incoming set for notification purposes.
    pub async fn member_ids(
        conn: &mut PgConnection,
        project_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> =
            sqlx::query_as("SELECT member_id FROM project_team_members WHERE project_id = $1")
                .bind(project_id)
                .fetch_all(conn)
                .await?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    /// Team members as admin summaries, for the project detail view.
    pub async fn list_members(pool: &PgPool, project_id: DbId) -> Result<Vec<Admin>, sqlx::Error> {
        sqlx::query_as::<_, Admin>(
            "SELECT a.id, a.name, a.email FROM admins a
             JOIN project_team_members m ON m.member_id = a.id
             WHERE m.project_id = $1
             ORDER BY a.name",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Directors as admin summaries.
    pub async fn list_directors(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Admin>, sqlx::Error> {
        sqlx::query_as::<_, Admin>(
            "SELECT a.id, a.name, a.email FROM admins a
             JOIN project_directors d ON d.director_id = a.id
             WHERE d.project_id = $1
             ORDER BY a.name",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Stakeholders as client-contact summaries.
    pub async fn list_stakeholders(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ClientContact>, sqlx::Error> {
        sqlx::query_as::<_, ClientContact>(
            "SELECT c.id, c.client_id, c.name, c.email FROM client_contacts c
             JOIN project_stakeholders s ON s.stakeholder_id = c.id
             WHERE s.project_id = $1
             ORDER BY c.name",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }
}
