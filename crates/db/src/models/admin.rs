//! Internal staff users.

use serde::Serialize;
use sqlx::FromRow;
use stafflane_core::types::DbId;

/// A row from the `admins` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Admin {
    pub id: DbId,
    pub name: String,
    pub email: String,
}
