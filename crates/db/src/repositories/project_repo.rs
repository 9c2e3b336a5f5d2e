//! Repository for the `master_projects` table.

use sqlx::{PgConnection, PgPool};
use stafflane_core::types::DbId;

use crate::models::project::{MasterProject, ProjectFields};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, project_type, background, notes, project_status, client_id, \
     admin_id, no_of_freelancers, duration_count, duration_unit, budget_amount, \
     budget_currency, budget_unit, budget_notes, min_years_experience, max_years_experience, \
     location, city, country, freelancer_location_type, educational_background, \
     project_start_date, segment, sub_segment, is_client_confidential, sharepoint_link, \
     client_type, closed_quarter, closed_year, created_at, modified_at";

/// CRUD and listing operations for master projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project owned by `admin_id`.
    ///
    /// `project_status` defaults to "Market Scan" when not supplied.
    pub async fn create(
        conn: &mut PgConnection,
        admin_id: DbId,
        fields: &ProjectFields,
    ) -> Result<MasterProject, sqlx::Error> {
        let query = format!(
            "INSERT INTO master_projects (
                name, project_type, background, notes, project_status, client_id, admin_id,
                no_of_freelancers, duration_count, duration_unit, budget_amount,
                budget_currency, budget_unit, budget_notes, min_years_experience,
                max_years_experience, location, city, country, freelancer_location_type,
                educational_background, project_start_date, segment, sub_segment,
                is_client_confidential, sharepoint_link, client_type, closed_quarter,
                closed_year)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'Market Scan'), $6, $7, $8, $9, $10, $11,
                     $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24,
                     COALESCE($25, FALSE), $26, $27, $28, $29)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MasterProject>(&query)
            .bind(&fields.name)
            .bind(&fields.project_type)
            .bind(&fields.background)
            .bind(&fields.notes)
            .bind(&fields.project_status)
            .bind(fields.client_id)
            .bind(admin_id)
            .bind(fields.no_of_freelancers)
            .bind(fields.duration_count)
            .bind(&fields.duration_unit)
            .bind(fields.budget_amount)
            .bind(&fields.budget_currency)
            .bind(&fields.budget_unit)
            .bind(&fields.budget_notes)
            .bind(fields.min_years_experience)
            .bind(fields.max_years_experience)
            .bind(&fields.location)
            .bind(&fields.city)
            .bind(&fields.country)
            .bind(&fields.freelancer_location_type)
            .bind(&fields.educational_background)
            .bind(fields.project_start_date)
            .bind(&fields.segment)
            .bind(&fields.sub_segment)
            .bind(fields.is_client_confidential)
            .bind(&fields.sharepoint_link)
            .bind(&fields.client_type)
            .bind(&fields.closed_quarter)
            .bind(&fields.closed_year)
            .fetch_one(conn)
            .await
    }

    /// Partial update: only non-`None` fields are applied. Touches
    /// `modified_at`. Returns `None` when the project does not exist.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        fields: &ProjectFields,
    ) -> Result<Option<MasterProject>, sqlx::Error> {
        let query = format!(
            "UPDATE master_projects SET
                name = COALESCE($2, name),
                project_type = COALESCE($3, project_type),
                background = COALESCE($4, background),
                notes = COALESCE($5, notes),
                project_status = COALESCE($6, project_status),
                client_id = COALESCE($7, client_id),
                no_of_freelancers = COALESCE($8, no_of_freelancers),
                duration_count = COALESCE($9, duration_count),
                duration_unit = COALESCE($10, duration_unit),
                budget_amount = COALESCE($11, budget_amount),
                budget_currency = COALESCE($12, budget_currency),
                budget_unit = COALESCE($13, budget_unit),
                budget_notes = COALESCE($14, budget_notes),
                min_years_experience = COALESCE($15, min_years_experience),
                max_years_experience = COALESCE($16, max_years_experience),
                location = COALESCE($17, location),
                city = COALESCE($18, city),
                country = COALESCE($19, country),
                freelancer_location_type = COALESCE($20, freelancer_location_type),
                educational_background = COALESCE($21, educational_background),
                project_start_date = COALESCE($22, project_start_date),
                segment = COALESCE($23, segment),
                sub_segment = COALESCE($24, sub_segment),
                is_client_confidential = COALESCE($25, is_client_confidential),
                sharepoint_link = COALESCE($26, sharepoint_link),
                client_type = COALESCE($27, client_type),
                closed_quarter = COALESCE($28, closed_quarter),
                closed_year = COALESCE($29, closed_year),
                modified_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MasterProject>(&query)
            .bind(id)
            .bind(&fields.name)
            .bind(&fields.project_type)
            .bind(&fields.background)
            .bind(&fields.notes)
            .bind(&fields.project_status)
            .bind(fields.client_id)
            .bind(fields.no_of_freelancers)
            .bind(fields.duration_count)
            .bind(&fields.duration_unit)
            .bind(fields.budget_amount)
            .bind(&fields.budget_currency)
            .bind(&fields.budget_unit)
            .bind(&fields.budget_notes)
            .bind(fields.min_years_experience)
            .bind(fields.max_years_experience)
            .bind(&fields.location)
            .bind(&fields.city)
            .bind(&fields.country)
            .bind(&fields.freelancer_location_type)
            .bind(&fields.educational_background)
            .bind(fields.project_start_date)
            .bind(&fields.segment)
            .bind(&fields.sub_segment)
            .bind(fields.is_client_confidential)
            .bind(&fields.sharepoint_link)
            .bind(&fields.client_type)
            .bind(&fields.closed_quarter)
            .bind(&fields.closed_year)
            .fetch_optional(conn)
            .await
    }

    /// Find a project by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MasterProject>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM master_projects WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, MasterProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Transactional existence check used before candidate writes.
    pub async fn exists(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM master_projects WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;
        Ok(row.is_some())
    }

    /// Fetch several projects by ID, newest first. Excludes soft-deleted rows.
    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<MasterProject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM master_projects
             WHERE id = ANY($1) AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, MasterProject>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List projects newest first, optionally filtered by status, by an
    /// admin who must be a director or team member of the project, and by
    /// an explicit id set (the search path passes full-text hit ids here).
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        admin_id: Option<DbId>,
        ids: Option<&[DbId]>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MasterProject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM master_projects p
             WHERE p.deleted_at IS NULL
               AND ($1::TEXT IS NULL OR p.project_status = $1)
               AND ($2::BIGINT IS NULL
                    OR EXISTS (SELECT 1 FROM project_directors d
                               WHERE d.project_id = p.id AND d.director_id = $2)
                    OR EXISTS (SELECT 1 FROM project_team_members m
                               WHERE m.project_id = p.id AND m.member_id = $2))
               AND ($3::BIGINT[] IS NULL OR p.id = ANY($3))
             ORDER BY p.created_at DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, MasterProject>(&query)
            .bind(status)
            .bind(admin_id)
            .bind(ids)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count the rows `list` would return before pagination.
    pub async fn count(
        pool: &PgPool,
        status: Option<&str>,
        admin_id: Option<DbId>,
        ids: Option<&[DbId]>,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM master_projects p
             WHERE p.deleted_at IS NULL
               AND ($1::TEXT IS NULL OR p.project_status = $1)
               AND ($2::BIGINT IS NULL
                    OR EXISTS (SELECT 1 FROM project_directors d
                               WHERE d.project_id = p.id AND d.director_id = $2)
                    OR EXISTS (SELECT 1 FROM project_team_members m
                               WHERE m.project_id = p.id AND m.member_id = $2))
               AND ($3::BIGINT[] IS NULL OR p.id = ANY($3))",
        )
        .bind(status)
        .bind(admin_id)
        .bind(ids)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Set the staffing-funnel stage. The caller validates the value
    /// against the allow-list. Returns `false` when the project is missing.
    pub async fn set_stage(
        conn: &mut PgConnection,
        id: DbId,
        stage: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE master_projects SET project_status = $2, modified_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(stage)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Bump `modified_at`, used by the indexer to mark reindex time.
    pub async fn touch_modified(conn: &mut PgConnection, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE master_projects SET modified_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Soft-delete a project. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE master_projects SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All live (non-deleted) project IDs, for full index rebuilds.
    pub async fn all_ids(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> =
            sqlx::query_as("SELECT id FROM master_projects WHERE deleted_at IS NULL ORDER BY id")
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }
}
