//! Project and freelancer note rows.

use serde::Serialize;
use sqlx::FromRow;
use stafflane_core::types::{DbId, Timestamp};

/// A row from the `project_notes` table. `admin_id` is `None` for
/// ownerless notes imported from legacy data.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectNote {
    pub id: DbId,
    pub project_id: DbId,
    pub admin_id: Option<DbId>,
    pub note: String,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
}

/// A row from the `freelancer_notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FreelancerNote {
    pub id: DbId,
    pub freelancer_id: DbId,
    pub project_id: Option<DbId>,
    pub admin_id: Option<DbId>,
    pub note: String,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
}

/// A note joined with its author, for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NoteWithAuthor {
    pub id: DbId,
    pub admin_id: Option<DbId>,
    pub note: String,
    pub created_at: Timestamp,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
}
