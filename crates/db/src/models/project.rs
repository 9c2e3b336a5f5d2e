//! Master-project entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stafflane_core::types::{DbId, Timestamp};

/// A row from the `master_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MasterProject {
    pub id: DbId,
    pub name: String,
    pub project_type: Option<String>,
    pub background: Option<String>,
    pub notes: Option<String>,
    pub project_status: Option<String>,
    pub client_id: Option<DbId>,
    pub admin_id: Option<DbId>,
    pub no_of_freelancers: Option<i32>,
    pub duration_count: Option<i32>,
    pub duration_unit: Option<String>,
    pub budget_amount: Option<f64>,
    pub budget_currency: Option<String>,
    pub budget_unit: Option<String>,
    pub budget_notes: Option<String>,
    pub min_years_experience: Option<i32>,
    pub max_years_experience: Option<i32>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub freelancer_location_type: Option<String>,
    pub educational_background: Option<String>,
    pub project_start_date: Option<NaiveDate>,
    pub segment: Option<String>,
    pub sub_segment: Option<String>,
    pub is_client_confidential: bool,
    pub sharepoint_link: Option<String>,
    pub client_type: Option<String>,
    pub closed_quarter: Option<String>,
    pub closed_year: Option<String>,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
}

/// Scalar fields accepted by the project upsert.
///
/// On update, `None` leaves the stored value unchanged; the associated
/// sets (attributes, scope, team) are handled separately and are always
/// replaced in full.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFields {
    pub name: Option<String>,
    pub project_type: Option<String>,
    pub background: Option<String>,
    pub notes: Option<String>,
    pub project_status: Option<String>,
    pub client_id: Option<DbId>,
    pub no_of_freelancers: Option<i32>,
    pub duration_count: Option<i32>,
    pub duration_unit: Option<String>,
    pub budget_amount: Option<f64>,
    pub budget_currency: Option<String>,
    pub budget_unit: Option<String>,
    pub budget_notes: Option<String>,
    pub min_years_experience: Option<i32>,
    pub max_years_experience: Option<i32>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub freelancer_location_type: Option<String>,
    pub educational_background: Option<String>,
    pub project_start_date: Option<NaiveDate>,
    pub segment: Option<String>,
    pub sub_segment: Option<String>,
    pub is_client_confidential: Option<bool>,
    pub sharepoint_link: Option<String>,
    pub client_type: Option<String>,
    pub closed_quarter: Option<String>,
    pub closed_year: Option<String>,
}
