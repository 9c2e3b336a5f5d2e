//! Scope document attachments (uploaded files and external links).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stafflane_core::types::DbId;

/// A row from the `project_scope_files` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScopeFile {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub link: String,
    pub is_scope: bool,
}

/// A row from the `project_scope_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScopeLink {
    pub id: DbId,
    pub project_id: DbId,
    pub document_name: String,
    pub link: String,
    pub is_scope: bool,
}

/// Input for one scope link in a replacement set.
#[derive(Debug, Clone, Deserialize)]
pub struct ScopeLinkInput {
    pub document_name: String,
    pub link: String,
    #[serde(default)]
    pub is_scope: bool,
}
