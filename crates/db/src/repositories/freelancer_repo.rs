//! Repository for the `freelancers` table.

use sqlx::{PgConnection, PgPool};
use stafflane_core::types::DbId;

use crate::models::freelancer::Freelancer;

const COLUMNS: &str = "id, name, email, profile_status, interview_status, created_at, modified_at";

pub struct FreelancerRepo;

impl FreelancerRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Freelancer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM freelancers WHERE id = $1");
        sqlx::query_as::<_, Freelancer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM freelancers WHERE id = $1")
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(row.is_some())
    }

    /// Mark the profile accepted, a side effect of being added to a project.
    pub async fn set_profile_status(
        conn: &mut PgConnection,
        id: DbId,
        status: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE freelancers SET profile_status = $2, modified_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Reset the interview status, a side effect of a candidate moving
    /// back to the default stage.
    pub async fn set_interview_status(
        conn: &mut PgConnection,
        id: DbId,
        status: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE freelancers SET interview_status = $2, modified_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(status)
        .execute(conn)
        .await?;
        Ok(())
    }
}
