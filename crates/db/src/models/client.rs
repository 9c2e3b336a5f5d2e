//! Client companies, their contacts, and the per-project client mapping.

use serde::Serialize;
use sqlx::FromRow;
use stafflane_core::types::DbId;

/// A row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
}

/// A row from the `client_contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientContact {
    pub id: DbId,
    pub client_id: DbId,
    pub name: String,
    pub email: Option<String>,
}

/// The single client mapping attached to a project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectClientMap {
    pub id: DbId,
    pub project_id: DbId,
    pub client_id: DbId,
    pub stakeholder_id: Option<DbId>,
}
