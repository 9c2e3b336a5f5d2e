//! Repository for the one-to-one `project_location_details` row.

use sqlx::{PgConnection, PgPool};
use stafflane_core::types::DbId;

use crate::models::location::{ProjectLocation, UpsertLocation};

const COLUMNS: &str = "id, project_id, location, location_type, looking_for, start_date, \
     duration_count, duration_unit, budget_currency, budget_amount, enable_full_time, \
     expected_annual_salary, enable_fixed_rate_projects, expected_monthly_rate, \
     enable_full_day_projects, expected_daily_rate, enable_hourly_projects, \
     expected_hourly_rate, min_hours";

pub struct LocationRepo;

impl LocationRepo {
    /// Create the row on first write, then apply the full field set.
    pub async fn upsert(
        conn: &mut PgConnection,
        project_id: DbId,
        input: &UpsertLocation,
    ) -> Result<ProjectLocation, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_location_details (
                project_id, location, location_type, looking_for, start_date, duration_count,
                duration_unit, budget_currency, budget_amount, enable_full_time,
                expected_annual_salary, enable_fixed_rate_projects, expected_monthly_rate,
                enable_full_day_projects, expected_daily_rate, enable_hourly_projects,
                expected_hourly_rate, min_hours)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                     $17, $18)
             ON CONFLICT ON CONSTRAINT uq_location_project DO UPDATE SET
                location = EXCLUDED.location,
                location_type = EXCLUDED.location_type,
                looking_for = EXCLUDED.looking_for,
                start_date = EXCLUDED.start_date,
                duration_count = EXCLUDED.duration_count,
                duration_unit = EXCLUDED.duration_unit,
                budget_currency = EXCLUDED.budget_currency,
                budget_amount = EXCLUDED.budget_amount,
                enable_full_time = EXCLUDED.enable_full_time,
                expected_annual_salary = EXCLUDED.expected_annual_salary,
                enable_fixed_rate_projects = EXCLUDED.enable_fixed_rate_projects,
                expected_monthly_rate = EXCLUDED.expected_monthly_rate,
                enable_full_day_projects = EXCLUDED.enable_full_day_projects,
                expected_daily_rate = EXCLUDED.expected_daily_rate,
                enable_hourly_projects = EXCLUDED.enable_hourly_projects,
                expected_hourly_rate = EXCLUDED.expected_hourly_rate,
                min_hours = EXCLUDED.min_hours
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectLocation>(&query)
            .bind(project_id)
            .bind(&input.location)
            .bind(&input.location_type)
            .bind(&input.looking_for)
            .bind(input.start_date)
            .bind(input.duration_count)
            .bind(&input.duration_unit)
            .bind(&input.budget_currency)
            .bind(input.budget_amount)
            .bind(input.enable_full_time)
            .bind(input.expected_annual_salary)
            .bind(input.enable_fixed_rate_projects)
            .bind(input.expected_monthly_rate)
            .bind(input.enable_full_day_projects)
            .bind(input.expected_daily_rate)
            .bind(input.enable_hourly_projects)
            .bind(input.expected_hourly_rate)
            .bind(input.min_hours)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<ProjectLocation>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM project_location_details WHERE project_id = $1");
        sqlx::query_as::<_, ProjectLocation>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }
}
