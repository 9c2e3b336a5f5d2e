//! Lookup rows behind the project attribute map.

use serde::Serialize;
use sqlx::FromRow;
use stafflane_core::types::DbId;

/// An (id, name) pair from one of the lookup tables
/// (`sectors`, `skills`, segments, scales, ...).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LookupItem {
    pub id: DbId,
    pub name: String,
}

/// A lookup item flagged with whether the project currently selects it.
/// Used by the feedback-form projection.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SelectableItem {
    pub id: DbId,
    pub name: String,
    pub selected: bool,
}
