//! The one-to-one project location-details extension row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stafflane_core::types::DbId;

/// A row from the `project_location_details` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectLocation {
    pub id: DbId,
    pub project_id: DbId,
    pub location: Option<String>,
    pub location_type: Option<String>,
    pub looking_for: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub duration_count: Option<i32>,
    pub duration_unit: Option<String>,
    pub budget_currency: Option<String>,
    pub budget_amount: Option<i32>,
    pub enable_full_time: bool,
    pub expected_annual_salary: Option<i32>,
    pub enable_fixed_rate_projects: bool,
    pub expected_monthly_rate: Option<i32>,
    pub enable_full_day_projects: bool,
    pub expected_daily_rate: Option<i32>,
    pub enable_hourly_projects: bool,
    pub expected_hourly_rate: Option<i32>,
    pub min_hours: Option<i32>,
}

/// Full field set applied on every location upsert (no partial update;
/// the form always submits everything).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertLocation {
    pub location: Option<String>,
    pub location_type: Option<String>,
    pub looking_for: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub duration_count: Option<i32>,
    pub duration_unit: Option<String>,
    pub budget_currency: Option<String>,
    pub budget_amount: Option<i32>,
    #[serde(default)]
    pub enable_full_time: bool,
    pub expected_annual_salary: Option<i32>,
    #[serde(default)]
    pub enable_fixed_rate_projects: bool,
    pub expected_monthly_rate: Option<i32>,
    #[serde(default)]
    pub enable_full_day_projects: bool,
    pub expected_daily_rate: Option<i32>,
    #[serde(default)]
    pub enable_hourly_projects: bool,
    pub expected_hourly_rate: Option<i32>,
    pub min_hours: Option<i32>,
}
