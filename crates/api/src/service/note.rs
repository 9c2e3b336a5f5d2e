//! Note writes for projects and freelancers.
//!
//! Edit and delete are author-only; a note without an owner (legacy
//! import) is claimed by the first admin who edits or deletes it.

use sqlx::{PgConnection, PgPool};
use stafflane_core::error::CoreError;
use stafflane_core::types::DbId;

use stafflane_db::models::note::{FreelancerNote, ProjectNote};
use stafflane_db::repositories::freelancer_repo::FreelancerRepo;
use stafflane_db::repositories::note_repo::NoteRepo;
use stafflane_db::repositories::project_repo::ProjectRepo;

use crate::error::{AppError, AppResult};

fn check_note_owner(owner: Option<DbId>, actor: DbId) -> Result<(), CoreError> {
    match owner {
        Some(owner) if owner != actor => Err(CoreError::Forbidden(
            "You don't have permission to edit this note".to_string(),
        )),
        // None: ownerless note, the actor claims it.
        _ => Ok(()),
    }
}

async fn require_freelancer(conn: &mut PgConnection, id: DbId) -> Result<(), AppError> {
    if !FreelancerRepo::exists(conn, id).await? {
        return Err(CoreError::validation("Freelancer id does not exist").into());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Project notes
// ---------------------------------------------------------------------------

pub async fn add_project_note(
    pool: &PgPool,
    admin_id: DbId,
    project_id: DbId,
    note: &str,
) -> AppResult<ProjectNote> {
    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    if !ProjectRepo::exists(&mut *tx, project_id).await? {
        return Err(CoreError::validation("Project id does not exist").into());
    }
    let created = NoteRepo::create_project_note(&mut *tx, project_id, admin_id, note).await?;
    tx.commit().await.map_err(AppError::Database)?;
    Ok(created)
}

pub async fn edit_project_note(
    pool: &PgPool,
    admin_id: DbId,
    note_id: DbId,
    note: &str,
) -> AppResult<ProjectNote> {
    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    let existing = NoteRepo::find_project_note(&mut *tx, note_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Note",
            id: note_id,
        })?;
    check_note_owner(existing.admin_id, admin_id)?;
    let updated = NoteRepo::update_project_note(&mut *tx, note_id, admin_id, note).await?;
    tx.commit().await.map_err(AppError::Database)?;
    Ok(updated)
}

pub async fn delete_project_note(pool: &PgPool, admin_id: DbId, note_id: DbId) -> AppResult<()> {
    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    let existing = NoteRepo::find_project_note(&mut *tx, note_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Note",
            id: note_id,
        })?;
    check_note_owner(existing.admin_id, admin_id)?;
    NoteRepo::delete_project_note(&mut *tx, note_id).await?;
    tx.commit().await.map_err(AppError::Database)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Freelancer notes
// ---------------------------------------------------------------------------

pub async fn add_freelancer_note(
    pool: &PgPool,
    admin_id: DbId,
    freelancer_id: DbId,
    project_id: Option<DbId>,
    note: &str,
) -> AppResult<FreelancerNote> {
    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    require_freelancer(&mut *tx, freelancer_id).await?;
    let created =
        NoteRepo::create_freelancer_note(&mut *tx, freelancer_id, project_id, admin_id, note)
            .await?;
    tx.commit().await.map_err(AppError::Database)?;
    Ok(created)
}

pub async fn edit_freelancer_note(
    pool: &PgPool,
    admin_id: DbId,
    note_id: DbId,
    note: &str,
) -> AppResult<FreelancerNote> {
    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    let existing = NoteRepo::find_freelancer_note(&mut *tx, note_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Note",
            id: note_id,
        })?;
    check_note_owner(existing.admin_id, admin_id)?;
    let updated = NoteRepo::update_freelancer_note(&mut *tx, note_id, admin_id, note).await?;
    tx.commit().await.map_err(AppError::Database)?;
    Ok(updated)
}

pub async fn delete_freelancer_note(
    pool: &PgPool,
    admin_id: DbId,
    note_id: DbId,
) -> AppResult<()> {
    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    let existing = NoteRepo::find_freelancer_note(&mut *tx, note_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Note",
            id: note_id,
        })?;
    check_note_owner(existing.admin_id, admin_id)?;
    NoteRepo::delete_freelancer_note(&mut *tx, note_id).await?;
    tx.commit().await.map_err(AppError::Database)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
