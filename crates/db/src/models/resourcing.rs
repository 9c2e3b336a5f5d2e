//! The one-to-one project resourcing row and its lookup constants.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stafflane_core::types::DbId;

use crate::models::attribute::LookupItem;

/// A row from the `project_resourcings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectResourcing {
    pub id: DbId,
    pub project_id: DbId,
    pub segment_id: Option<DbId>,
    pub sub_segment_id: Option<DbId>,
    pub rating_criteria_id: Option<DbId>,
    pub director_id: Option<DbId>,
    pub lead_id: Option<DbId>,
    pub notes: Option<String>,
}

/// Full field set applied on every resourcing upsert. `member_ids`
/// replaces the project team-member set in full.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertResourcing {
    pub segment_id: Option<DbId>,
    pub sub_segment_id: Option<DbId>,
    pub rating_criteria_id: Option<DbId>,
    pub director_id: Option<DbId>,
    pub lead_id: Option<DbId>,
    pub notes: Option<String>,
    #[serde(default)]
    pub member_ids: Vec<DbId>,
}

/// The lookup vocabularies backing the resourcing form.
#[derive(Debug, Clone, Serialize)]
pub struct ResourcingConstants {
    pub segments: Vec<LookupItem>,
    pub sub_segments: Vec<LookupItem>,
    pub rating_criteria: Vec<LookupItem>,
}
