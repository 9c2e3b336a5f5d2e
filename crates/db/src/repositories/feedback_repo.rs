//! Repository for the feedback-form scale/criteria selections.

use sqlx::{PgConnection, PgPool};
use stafflane_core::types::DbId;

use crate::models::attribute::SelectableItem;

pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Replace both selection sets in full.
    pub async fn replace(
        conn: &mut PgConnection,
        project_id: DbId,
        scale_ids: &[DbId],
        criteria_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_scale_map WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *conn)
            .await?;
        for scale_id in scale_ids {
            sqlx::query(
                "INSERT INTO project_scale_map (project_id, scale_id) VALUES ($1, $2)
                 ON CONFLICT ON CONSTRAINT uq_project_scale DO NOTHING",
            )
            .bind(project_id)
            .bind(scale_id)
            .execute(&mut *conn)
            .await?;
        }

        sqlx::query("DELETE FROM project_criteria_map WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *conn)
            .await?;
        for criteria_id in criteria_ids {
            sqlx::query(
                "INSERT INTO project_criteria_map (project_id, criteria_id) VALUES ($1, $2)
                 ON CONFLICT ON CONSTRAINT uq_project_criteria DO NOTHING",
            )
            .bind(project_id)
            .bind(criteria_id)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    /// All scales, each flagged with whether the project selects it.
    pub async fn scales(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<SelectableItem>, sqlx::Error> {
        sqlx::query_as::<_, SelectableItem>(
            "SELECT s.id, s.name,
                    EXISTS (SELECT 1 FROM project_scale_map m
                            WHERE m.scale_id = s.id AND m.project_id = $1) AS selected
             FROM scales s ORDER BY s.id",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// All criteria, each flagged with whether the project selects it.
    pub async fn criteria(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<SelectableItem>, sqlx::Error> {
        sqlx::query_as::<_, SelectableItem>(
            "SELECT c.id, c.name,
                    EXISTS (SELECT 1 FROM project_criteria_map m
                            WHERE m.criteria_id = c.id AND m.project_id = $1) AS selected
             FROM scale_criteria c ORDER BY c.id",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }
}
