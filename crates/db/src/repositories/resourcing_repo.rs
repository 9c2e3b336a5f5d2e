//! Repository for the one-to-one `project_resourcings` row.

use sqlx::{PgConnection, PgPool};
use stafflane_core::types::DbId;

use crate::models::resourcing::{ProjectResourcing, UpsertResourcing};

const COLUMNS: &str =
    "id, project_id, segment_id, sub_segment_id, rating_criteria_id, director_id, lead_id, notes";

pub struct ResourcingRepo;

impl ResourcingRepo {
    /// Fetch the resourcing row inside a transaction, creating an empty one
    /// on first access. The service diffs the previous director/lead against
    /// the incoming assignment before applying `update`.
    pub async fn get_or_create(
        conn: &mut PgConnection,
        project_id: DbId,
    ) -> Result<ProjectResourcing, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_resourcings (project_id) VALUES ($1)
             ON CONFLICT ON CONSTRAINT uq_resourcing_project DO UPDATE
                SET project_id = EXCLUDED.project_id
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectResourcing>(&query)
            .bind(project_id)
            .fetch_one(conn)
            .await
    }

    /// Apply the full resourcing field set (the form always submits
    /// everything, so this is not a partial update).
    pub async fn update(
        conn: &mut PgConnection,
        project_id: DbId,
        input: &UpsertResourcing,
    ) -> Result<ProjectResourcing, sqlx::Error> {
        let query = format!(
            "UPDATE project_resourcings SET
                segment_id = $2,
                sub_segment_id = $3,
                rating_criteria_id = $4,
                director_id = $5,
                lead_id = $6,
                notes = $7
             WHERE project_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectResourcing>(&query)
            .bind(project_id)
            .bind(input.segment_id)
            .bind(input.sub_segment_id)
            .bind(input.rating_criteria_id)
            .bind(input.director_id)
            .bind(input.lead_id)
            .bind(&input.notes)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<ProjectResourcing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_resourcings WHERE project_id = $1");
        sqlx::query_as::<_, ProjectResourcing>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }
}
