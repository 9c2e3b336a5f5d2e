//! Candidate-pipeline rows and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stafflane_core::types::{DbId, Timestamp};

/// A row from the `project_candidate_map` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Candidate {
    pub id: DbId,
    pub project_id: DbId,
    pub freelancer_id: DbId,
    pub stage: String,
    pub rejected: bool,
    pub rate_unit: Option<String>,
    pub rate_currency: Option<String>,
    pub rate_amount: Option<f64>,
    pub added_on: Timestamp,
}

/// A candidate mapping joined with its freelancer profile, as listed on
/// the project funnel page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CandidateWithFreelancer {
    pub id: DbId,
    pub project_id: DbId,
    pub freelancer_id: DbId,
    pub stage: String,
    pub rejected: bool,
    pub rate_unit: Option<String>,
    pub rate_currency: Option<String>,
    pub rate_amount: Option<f64>,
    pub added_on: Timestamp,
    pub freelancer_name: String,
    pub freelancer_email: String,
}

/// Partial update applied to a single candidate mapping.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditCandidate {
    pub stage: Option<String>,
    pub rate_unit: Option<String>,
    pub rate_currency: Option<String>,
    pub rate_amount: Option<f64>,
}

/// Rate quote applied to a (project, freelancer) mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteUpdate {
    pub project_id: DbId,
    pub freelancer_id: DbId,
    pub rate_unit: Option<String>,
    pub rate_currency: Option<String>,
    pub rate_amount: Option<f64>,
}
