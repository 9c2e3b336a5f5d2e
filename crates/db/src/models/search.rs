//! Full-text index rows and search projections.

use serde::Serialize;
use sqlx::FromRow;
use stafflane_core::types::{DbId, Timestamp};

/// A row from the `project_documents` index table (without the tsvector).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectDocument {
    pub project_id: DbId,
    pub title: String,
    pub client_name: Option<String>,
    pub body: String,
    pub ac_search_field: String,
    pub indexed_at: Timestamp,
}

/// A ranked full-text search hit.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SearchHit {
    pub project_id: DbId,
    pub title: String,
    pub client_name: Option<String>,
    pub rank: f32,
}

/// An autocomplete suggestion from the keyword index.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AutocompleteHit {
    pub keyword_id: DbId,
    pub keyword: String,
    pub client_name: Option<String>,
}

/// Everything the document builder needs about one project, loaded in a
/// handful of queries by `IndexRepo::load_source`.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    pub project: crate::models::project::MasterProject,
    pub client_name: Option<String>,
    pub skills: Vec<String>,
    pub sectors: Vec<String>,
    pub director_names: Vec<String>,
    pub member_names: Vec<String>,
}
