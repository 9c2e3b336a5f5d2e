//! Aggregate counts for the staffing dashboard.

use sqlx::PgPool;

use crate::models::dashboard::DashboardCounts;

pub struct DashboardRepo;

impl DashboardRepo {
    pub async fn counts(pool: &PgPool) -> Result<DashboardCounts, sqlx::Error> {
        let pending_qa: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM freelancers WHERE profile_status = 'Pending QA'")
                .fetch_one(pool)
                .await?;
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM freelancers")
            .fetch_one(pool)
            .await?;
        let live: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM master_projects
             WHERE deleted_at IS NULL
               AND (project_status IS NULL OR project_status NOT IN ('Won', 'Lost'))",
        )
        .fetch_one(pool)
        .await?;
        Ok(DashboardCounts {
            pending_qa_freelancers: pending_qa.0,
            total_freelancers: total.0,
            live_projects: live.0,
        })
    }
}
