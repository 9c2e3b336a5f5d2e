//! Freelancer profiles (the candidate side of the pipeline).

use serde::Serialize;
use sqlx::FromRow;
use stafflane_core::types::{DbId, Timestamp};

/// A row from the `freelancers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Freelancer {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub profile_status: Option<String>,
    pub interview_status: Option<String>,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
}
