//! Candidate-pipeline writes: bulk add, soft reject, stage/rate edits,
//! quotes, and bulk candidate email.

use serde::Deserialize;
use sqlx::PgPool;
use stafflane_core::candidate::{
    ACCEPTED_PROFILE_STATUS, DEFAULT_CANDIDATE_STAGE, PENDING_INTERVIEW_STATUS,
};
use stafflane_core::error::CoreError;
use stafflane_core::types::DbId;

use stafflane_db::models::candidate::{Candidate, EditCandidate, QuoteUpdate};
use stafflane_db::repositories::candidate_repo::CandidateRepo;
use stafflane_db::repositories::freelancer_repo::FreelancerRepo;
use stafflane_db::repositories::project_repo::ProjectRepo;

use crate::email::EmailDelivery;
use crate::error::{AppError, AppResult};
use crate::indexer;

/// Add one freelancer to a batch of projects at the default stage.
///
/// Idempotent per (project, freelancer): existing mappings keep their
/// stage and rejected state. As a side effect the freelancer's profile
/// status becomes "Accepted". Returns the number of new mappings.
pub async fn add_candidates(
    pool: &PgPool,
    project_ids: &[DbId],
    freelancer_id: DbId,
) -> AppResult<u64> {
    if project_ids.is_empty() {
        return Err(CoreError::validation("No project ids provided").into());
    }

    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    if !FreelancerRepo::exists(&mut *tx, freelancer_id).await? {
        return Err(CoreError::validation("Freelancer id does not exist").into());
    }
    for project_id in project_ids {
        if !ProjectRepo::exists(&mut *tx, *project_id).await? {
            return Err(CoreError::validation("Project id does not exist").into());
        }
    }
    FreelancerRepo::set_profile_status(&mut *tx, freelancer_id, ACCEPTED_PROFILE_STATUS).await?;
    let added = CandidateRepo::add_to_projects(&mut *tx, project_ids, freelancer_id).await?;
    tx.commit().await.map_err(AppError::Database)?;

    tracing::info!(freelancer_id, added, "Candidate added to projects");
    indexer::index_freelancer_projects(pool, freelancer_id).await;
    Ok(added)
}

/// Soft-reject a batch of candidate mappings. Rows survive with their
/// stage intact.
pub async fn reject_candidates(pool: &PgPool, candidate_ids: &[DbId]) -> AppResult<u64> {
    if candidate_ids.is_empty() {
        return Err(CoreError::validation("No candidate ids provided").into());
    }
    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    let rejected = CandidateRepo::reject(&mut *tx, candidate_ids).await?;
    tx.commit().await.map_err(AppError::Database)?;
    tracing::info!(rejected, "Candidates rejected");
    Ok(rejected)
}

/// Partial edit of one candidate mapping (stage and rate fields).
///
/// Moving a candidate back to the default stage resets the freelancer's
/// interview status to "Pending".
pub async fn edit_candidate(
    pool: &PgPool,
    candidate_id: DbId,
    input: &EditCandidate,
) -> AppResult<Candidate> {
    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    let existing = CandidateRepo::find_by_id(&mut *tx, candidate_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Candidate",
            id: candidate_id,
        })?;
    let updated = CandidateRepo::update(&mut *tx, candidate_id, input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Candidate",
            id: candidate_id,
        })?;
    if input.stage.as_deref() == Some(DEFAULT_CANDIDATE_STAGE) {
        FreelancerRepo::set_interview_status(
            &mut *tx,
            existing.freelancer_id,
            PENDING_INTERVIEW_STATUS,
        )
        .await?;
    }
    tx.commit().await.map_err(AppError::Database)?;

    indexer::index_freelancer_projects(pool, existing.freelancer_id).await;
    Ok(updated)
}

/// Update the rate quote on an existing (project, freelancer) mapping.
pub async fn update_quote(pool: &PgPool, input: &QuoteUpdate) -> AppResult<Candidate> {
    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    let updated = CandidateRepo::update_quote(
        &mut *tx,
        input.project_id,
        input.freelancer_id,
        input.rate_unit.as_deref(),
        input.rate_currency.as_deref(),
        input.rate_amount,
    )
    .await?
    .ok_or_else(|| {
        CoreError::validation("Freelancer is not a candidate on this project")
    })?;
    tx.commit().await.map_err(AppError::Database)?;
    Ok(updated)
}

/// Payload for the bulk candidate email operation.
#[derive(Debug, Deserialize)]
pub struct BulkEmailInput {
    pub candidate_ids: Vec<DbId>,
    pub subject: String,
    pub body: String,
}

/// Send one message to the freelancers behind a batch of candidate
/// mappings. Returns the number of successful deliveries.
pub async fn bulk_email(
    pool: &PgPool,
    mailer: Option<&EmailDelivery>,
    input: &BulkEmailInput,
) -> AppResult<usize> {
    let Some(mailer) = mailer else {
        return Err(CoreError::validation("Email delivery is not configured").into());
    };
    if input.candidate_ids.is_empty() {
        return Err(CoreError::validation("No candidate ids provided").into());
    }
    let recipients = CandidateRepo::emails(pool, &input.candidate_ids).await?;
    let sent = mailer
        .send_bulk(&recipients, &input.subject, &input.body)
        .await;
    tracing::info!(sent, total = recipients.len(), "Bulk candidate email dispatched");
    Ok(sent)
}
