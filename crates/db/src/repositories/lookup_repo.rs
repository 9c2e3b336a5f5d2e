//! Read-only access to the small lookup vocabularies.

use sqlx::PgPool;
use stafflane_core::candidate::TemplateStage;
use stafflane_core::types::DbId;

use crate::models::attribute::LookupItem;
use crate::models::resourcing::ResourcingConstants;

pub struct LookupRepo;

impl LookupRepo {
    async fn list_table(pool: &PgPool, table: &str) -> Result<Vec<LookupItem>, sqlx::Error> {
        let query = format!("SELECT id, name FROM {table} ORDER BY id");
        sqlx::query_as::<_, LookupItem>(&query).fetch_all(pool).await
    }

    /// The three resourcing-form vocabularies in one call.
    pub async fn resourcing_constants(pool: &PgPool) -> Result<ResourcingConstants, sqlx::Error> {
        Ok(ResourcingConstants {
            segments: Self::list_table(pool, "project_segments").await?,
            sub_segments: Self::list_table(pool, "project_sub_segments").await?,
            rating_criteria: Self::list_table(pool, "project_rating_criteria").await?,
        })
    }

    /// Ordered stages of one funnel template.
    pub async fn template_stages(
        pool: &PgPool,
        template_id: DbId,
    ) -> Result<Vec<TemplateStage>, sqlx::Error> {
        let rows: Vec<(DbId, String)> = sqlx::query_as(
            "SELECT id, name FROM template_stages WHERE template_id = $1 ORDER BY position",
        )
        .bind(template_id)
        .fetch_all(pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(id, name)| TemplateStage { id, name })
            .collect())
    }
}
