//! Repository for the `project_candidate_map` table (the staffing funnel).

use sqlx::{PgConnection, PgPool};
use stafflane_core::candidate::{CandidateSort, CandidateSortKey, DEFAULT_CANDIDATE_STAGE, REMOVED_STAGE};
use stafflane_core::types::DbId;

use crate::models::candidate::{Candidate, CandidateWithFreelancer, EditCandidate};

const COLUMNS: &str = "id, project_id, freelancer_id, stage, rejected, rate_unit, \
     rate_currency, rate_amount, added_on";

pub struct CandidateRepo;

impl CandidateRepo {
    /// Add one freelancer to several projects at the default stage.
    ///
    /// Existing (project, freelancer) mappings are left untouched, stage
    /// and rejected state included, so the operation is idempotent.
    /// Returns the number of newly inserted mappings.
    pub async fn add_to_projects(
        conn: &mut PgConnection,
        project_ids: &[DbId],
        freelancer_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO project_candidate_map (project_id, freelancer_id, stage)
             SELECT unnest($1::BIGINT[]), $2, $3
             ON CONFLICT ON CONSTRAINT uq_project_candidate DO NOTHING",
        )
        .bind(project_ids)
        .bind(freelancer_id)
        .bind(DEFAULT_CANDIDATE_STAGE)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// Soft-reject a batch of candidate mappings. The rows survive with
    /// their stage intact; only the flag flips.
    pub async fn reject(conn: &mut PgConnection, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE project_candidate_map SET rejected = TRUE WHERE id = ANY($1)")
            .bind(ids)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Candidate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_candidate_map WHERE id = $1");
        sqlx::query_as::<_, Candidate>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Partial update of stage and rate fields.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &EditCandidate,
    ) -> Result<Option<Candidate>, sqlx::Error> {
        let query = format!(
            "UPDATE project_candidate_map SET
                stage = COALESCE($2, stage),
                rate_unit = COALESCE($3, rate_unit),
                rate_currency = COALESCE($4, rate_currency),
                rate_amount = COALESCE($5, rate_amount)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Candidate>(&query)
            .bind(id)
            .bind(&input.stage)
            .bind(&input.rate_unit)
            .bind(&input.rate_currency)
            .bind(input.rate_amount)
            .fetch_optional(conn)
            .await
    }

    /// Update the rate quote on the mapping for (project, freelancer).
    pub async fn update_quote(
        conn: &mut PgConnection,
        project_id: DbId,
        freelancer_id: DbId,
        rate_unit: Option<&str>,
        rate_currency: Option<&str>,
        rate_amount: Option<f64>,
    ) -> Result<Option<Candidate>, sqlx::Error> {
        let query = format!(
            "UPDATE project_candidate_map SET
                rate_unit = COALESCE($3, rate_unit),
                rate_currency = COALESCE($4, rate_currency),
                rate_amount = COALESCE($5, rate_amount)
             WHERE project_id = $1 AND freelancer_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Candidate>(&query)
            .bind(project_id)
            .bind(freelancer_id)
            .bind(rate_unit)
            .bind(rate_currency)
            .bind(rate_amount)
            .fetch_optional(conn)
            .await
    }

    /// List candidates for a project joined with freelancer profiles.
    ///
    /// Candidates at the removed stage are always excluded; `stage` narrows
    /// to an exact stage. Sort falls back to insertion order when `None`.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
        stage: Option<&str>,
        sort: Option<CandidateSort>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CandidateWithFreelancer>, sqlx::Error> {
        let order = match sort {
            Some(s) => {
                let col = match s.key {
                    CandidateSortKey::Alphabetical => "f.name",
                    CandidateSortKey::Created => "f.created_at",
                    CandidateSortKey::Modified => "f.modified_at",
                    CandidateSortKey::AddedToProject => "c.added_on",
                };
                let dir = if s.descending { "DESC" } else { "ASC" };
                format!("{col} {dir}, c.id")
            }
            None => "c.id".to_string(),
        };
        let query = format!(
            "SELECT c.id, c.project_id, c.freelancer_id, c.stage, c.rejected, c.rate_unit,
                    c.rate_currency, c.rate_amount, c.added_on,
                    f.name AS freelancer_name, f.email AS freelancer_email
             FROM project_candidate_map c
             JOIN freelancers f ON f.id = c.freelancer_id
             WHERE c.project_id = $1
               AND c.stage <> $2
               AND ($3::TEXT IS NULL OR c.stage = $3)
             ORDER BY {order}
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, CandidateWithFreelancer>(&query)
            .bind(project_id)
            .bind(REMOVED_STAGE)
            .bind(stage)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Every candidate stage value on a project, removed ones included.
    /// Feeds the pure bucketing in core.
    pub async fn stages_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT stage FROM project_candidate_map WHERE project_id = $1")
                .bind(project_id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    /// Total candidates on a project, excluding the removed stage.
    pub async fn count_for_project(pool: &PgPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM project_candidate_map WHERE project_id = $1 AND stage <> $2",
        )
        .bind(project_id)
        .bind(REMOVED_STAGE)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// All mappings for one freelancer, newest first.
    pub async fn list_for_freelancer(
        pool: &PgPool,
        freelancer_id: DbId,
    ) -> Result<Vec<Candidate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_candidate_map
             WHERE freelancer_id = $1 ORDER BY added_on DESC"
        );
        sqlx::query_as::<_, Candidate>(&query)
            .bind(freelancer_id)
            .fetch_all(pool)
            .await
    }

    /// (project_id, stage) pairs for a freelancer, used to annotate
    /// assignment autocomplete hits.
    pub async fn stages_by_project(
        pool: &PgPool,
        freelancer_id: DbId,
    ) -> Result<Vec<(DbId, String)>, sqlx::Error> {
        sqlx::query_as("SELECT project_id, stage FROM project_candidate_map WHERE freelancer_id = $1")
            .bind(freelancer_id)
            .fetch_all(pool)
            .await
    }

    /// Distinct project IDs a freelancer is mapped to, for reindexing.
    pub async fn project_ids_for_freelancer(
        pool: &PgPool,
        freelancer_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT DISTINCT project_id FROM project_candidate_map WHERE freelancer_id = $1",
        )
        .bind(freelancer_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    /// Freelancer email addresses for a batch of candidate mappings.
    pub async fn emails(pool: &PgPool, ids: &[DbId]) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT DISTINCT f.email FROM freelancers f
             JOIN project_candidate_map c ON c.freelancer_id = f.id
             WHERE c.id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }
}
