//! Project aggregate writes: upsert, stage transition, soft delete, and
//! the per-section updates (location, resourcing, client, scope, feedback).

use serde::Deserialize;
use sqlx::PgPool;
use stafflane_core::attribute::AttributeKind;
use stafflane_core::error::CoreError;
use stafflane_core::project::{
    validate_experience_range, validate_freelance_headcount, validate_project_stage,
    validate_project_type,
};
use stafflane_core::types::DbId;

use stafflane_db::models::attribute::LookupItem;
use stafflane_db::models::client::ProjectClientMap;
use stafflane_db::models::location::{ProjectLocation, UpsertLocation};
use stafflane_db::models::project::{MasterProject, ProjectFields};
use stafflane_db::models::resourcing::{ProjectResourcing, UpsertResourcing};
use stafflane_db::models::scope::ScopeLinkInput;
use stafflane_db::repositories::admin_repo::AdminRepo;
use stafflane_db::repositories::attribute_repo::AttributeRepo;
use stafflane_db::repositories::client_repo::ClientRepo;
use stafflane_db::repositories::feedback_repo::FeedbackRepo;
use stafflane_db::repositories::index_repo::IndexRepo;
use stafflane_db::repositories::location_repo::LocationRepo;
use stafflane_db::repositories::membership_repo::MembershipRepo;
use stafflane_db::repositories::project_repo::ProjectRepo;
use stafflane_db::repositories::resourcing_repo::ResourcingRepo;
use stafflane_db::repositories::scope_repo::ScopeRepo;

use crate::email::EmailDelivery;
use crate::error::{AppError, AppResult};
use crate::indexer;

// ---------------------------------------------------------------------------
// Upsert
// ---------------------------------------------------------------------------

/// Project create/update payload.
///
/// Scalar fields are partial on update: `None` leaves the stored value
/// unchanged. The associated sets (attributes, scope, stakeholders, team,
/// directors) are replaced in full on every call, so omitting one empties
/// it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertProjectInput {
    /// Present for update, absent for create.
    pub id: Option<DbId>,
    #[serde(flatten)]
    pub fields: ProjectFields,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub sectors: Vec<String>,
    /// Uploaded scope-file links; display names derive from the last
    /// path segment.
    #[serde(default)]
    pub scope_files: Vec<String>,
    #[serde(default)]
    pub scope_links: Vec<ScopeLinkInput>,
    #[serde(default)]
    pub stakeholder_ids: Vec<DbId>,
    #[serde(default)]
    pub member_ids: Vec<DbId>,
    #[serde(default)]
    pub director_ids: Vec<DbId>,
}

fn validate_upsert(input: &UpsertProjectInput) -> Result<(), CoreError> {
    if input.id.is_none() && input.fields.name.as_deref().map_or(true, str::is_empty) {
        return Err(CoreError::validation("Project name not provided"));
    }
    if let Some(project_type) = input.fields.project_type.as_deref() {
        validate_project_type(project_type).map_err(CoreError::Validation)?;
    }
    validate_experience_range(
        input.fields.min_years_experience,
        input.fields.max_years_experience,
    )
    .map_err(CoreError::Validation)?;
    if input.id.is_none() {
        validate_freelance_headcount(
            input.fields.project_type.as_deref(),
            input.fields.no_of_freelancers,
        )
        .map_err(CoreError::Validation)?;
    }
    Ok(())
}

/// Create or update a project with its associated sets, then refresh the
/// search index (best-effort, post-commit).
pub async fn upsert_project(
    pool: &PgPool,
    actor_admin_id: DbId,
    input: &UpsertProjectInput,
) -> AppResult<MasterProject> {
    validate_upsert(input)?;

    let mut tx = pool.begin().await.map_err(AppError::Database)?;

    let project = match input.id {
        Some(id) => ProjectRepo::update(&mut *tx, id, &input.fields)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })?,
        None => ProjectRepo::create(&mut *tx, actor_admin_id, &input.fields).await?,
    };

    AttributeRepo::replace(&mut *tx, project.id, AttributeKind::Expertise, &input.expertise).await?;
    AttributeRepo::replace(&mut *tx, project.id, AttributeKind::Sector, &input.sectors).await?;
    ScopeRepo::replace_files(&mut *tx, project.id, &input.scope_files).await?;
    ScopeRepo::replace_links(&mut *tx, project.id, &input.scope_links).await?;
    MembershipRepo::replace_stakeholders(&mut *tx, project.id, &input.stakeholder_ids).await?;
    MembershipRepo::replace_members(&mut *tx, project.id, &input.member_ids).await?;
    MembershipRepo::replace_directors(&mut *tx, project.id, &input.director_ids).await?;

    tx.commit().await.map_err(AppError::Database)?;

    tracing::info!(project_id = project.id, "Project upserted");
    indexer::index_project_best_effort(pool, project.id).await;
    Ok(project)
}

/// Expertise and sector names currently attached, for the upsert response.
pub async fn project_attributes(
    pool: &PgPool,
    project_id: DbId,
) -> AppResult<(Vec<LookupItem>, Vec<LookupItem>)> {
    let expertise = AttributeRepo::list(pool, project_id, AttributeKind::Expertise).await?;
    let sectors = AttributeRepo::list(pool, project_id, AttributeKind::Sector).await?;
    Ok((expertise, sectors))
}

// ---------------------------------------------------------------------------
// Stage / delete
// ---------------------------------------------------------------------------

/// Move a project through the staffing funnel. The stage value must be
/// on the fixed allow-list.
pub async fn set_stage(pool: &PgPool, project_id: DbId, stage: &str) -> AppResult<()> {
    validate_project_stage(stage).map_err(CoreError::Validation)?;

    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    let updated = ProjectRepo::set_stage(&mut *tx, project_id, stage).await?;
    if !updated {
        return Err(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }
        .into());
    }
    tx.commit().await.map_err(AppError::Database)?;

    tracing::info!(project_id, stage, "Project stage changed");
    indexer::index_project_best_effort(pool, project_id).await;
    Ok(())
}

/// Soft-delete a project and drop its search documents.
pub async fn delete_project(pool: &PgPool, project_id: DbId) -> AppResult<()> {
    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    let deleted = ProjectRepo::soft_delete(&mut *tx, project_id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }
        .into());
    }
    tx.commit().await.map_err(AppError::Database)?;

    tracing::info!(project_id, "Project soft-deleted");
    if let Err(err) = IndexRepo::delete_project(pool, project_id).await {
        tracing::warn!(project_id, error = %err, "Index cleanup failed");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Section updates
// ---------------------------------------------------------------------------

async fn require_project(
    tx: &mut sqlx::PgConnection,
    project_id: DbId,
) -> Result<(), AppError> {
    if !ProjectRepo::exists(tx, project_id).await? {
        return Err(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }
        .into());
    }
    Ok(())
}

/// Apply the full location-details field set, creating the row lazily.
pub async fn upsert_location(
    pool: &PgPool,
    project_id: DbId,
    input: &UpsertLocation,
) -> AppResult<ProjectLocation> {
    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    require_project(&mut *tx, project_id).await?;
    let location = LocationRepo::upsert(&mut *tx, project_id, input).await?;
    ProjectRepo::touch_modified(&mut *tx, project_id).await?;
    tx.commit().await.map_err(AppError::Database)?;
    Ok(location)
}

/// A pending assignment notification, resolved inside the transaction
/// and delivered after commit.
struct RoleNotification {
    email: String,
    role: &'static str,
}

async fn admin_email(
    tx: &mut sqlx::PgConnection,
    admin_id: DbId,
) -> Result<Option<String>, sqlx::Error> {
    Ok(AdminRepo::find_by_id_tx(tx, admin_id).await?.map(|a| a.email))
}

/// Apply the resourcing assignment, replace the team-member set, and
/// notify exactly the role-holders whose assignment changed.
pub async fn upsert_resourcing(
    pool: &PgPool,
    project_id: DbId,
    input: &UpsertResourcing,
    mailer: Option<&EmailDelivery>,
) -> AppResult<ProjectResourcing> {
    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    require_project(&mut *tx, project_id).await?;

    let previous = ResourcingRepo::get_or_create(&mut *tx, project_id).await?;
    let previous_members = MembershipRepo::member_ids(&mut *tx, project_id).await?;

    let resourcing = ResourcingRepo::update(&mut *tx, project_id, input).await?;
    MembershipRepo::replace_members(&mut *tx, project_id, &input.member_ids).await?;
    ProjectRepo::touch_modified(&mut *tx, project_id).await?;

    let mut notifications: Vec<RoleNotification> = Vec::new();
    if input.director_id.is_some() && input.director_id != previous.director_id {
        if let Some(email) = admin_email(&mut *tx, input.director_id.unwrap_or_default()).await? {
            notifications.push(RoleNotification {
                email,
                role: "Director",
            });
        }
    }
    if input.lead_id.is_some() && input.lead_id != previous.lead_id {
        if let Some(email) = admin_email(&mut *tx, input.lead_id.unwrap_or_default()).await? {
            notifications.push(RoleNotification {
                email,
                role: "Lead",
            });
        }
    }
    for member_id in &input.member_ids {
        if !previous_members.contains(member_id) {
            if let Some(email) = admin_email(&mut *tx, *member_id).await? {
                notifications.push(RoleNotification {
                    email,
                    role: "Team Member",
                });
            }
        }
    }

    tx.commit().await.map_err(AppError::Database)?;

    if let Some(mailer) = mailer {
        let project = ProjectRepo::find_by_id(pool, project_id).await?;
        let project_name = project.map(|p| p.name).unwrap_or_default();
        for n in &notifications {
            if let Err(err) = mailer
                .send_resourcing_assignment(&n.email, &project_name, n.role)
                .await
            {
                tracing::warn!(to = %n.email, role = n.role, error = %err,
                    "Resourcing notification failed");
            }
        }
    }

    indexer::index_project_best_effort(pool, project_id).await;
    Ok(resourcing)
}

/// Replace the single client mapping and mirror the client onto the
/// project row.
pub async fn set_client(
    pool: &PgPool,
    project_id: DbId,
    client_id: DbId,
    stakeholder_id: Option<DbId>,
) -> AppResult<ProjectClientMap> {
    if ClientRepo::find_by_id(pool, client_id).await?.is_none() {
        return Err(CoreError::NotFound {
            entity: "Client",
            id: client_id,
        }
        .into());
    }

    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    require_project(&mut *tx, project_id).await?;
    let map = ClientRepo::set_project_client(&mut *tx, project_id, client_id, stakeholder_id).await?;
    let fields = ProjectFields {
        client_id: Some(client_id),
        ..ProjectFields::default()
    };
    ProjectRepo::update(&mut *tx, project_id, &fields).await?;
    tx.commit().await.map_err(AppError::Database)?;

    indexer::index_project_best_effort(pool, project_id).await;
    Ok(map)
}

/// Replace both feedback selection sets in full.
pub async fn set_feedback(
    pool: &PgPool,
    project_id: DbId,
    scale_ids: &[DbId],
    criteria_ids: &[DbId],
) -> AppResult<()> {
    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    require_project(&mut *tx, project_id).await?;
    FeedbackRepo::replace(&mut *tx, project_id, scale_ids, criteria_ids).await?;
    tx.commit().await.map_err(AppError::Database)?;
    Ok(())
}

/// Replace the scope-link set.
pub async fn replace_scope_links(
    pool: &PgPool,
    project_id: DbId,
    links: &[ScopeLinkInput],
) -> AppResult<()> {
    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    require_project(&mut *tx, project_id).await?;
    ScopeRepo::replace_links(&mut *tx, project_id, links).await?;
    ProjectRepo::touch_modified(&mut *tx, project_id).await?;
    tx.commit().await.map_err(AppError::Database)?;
    Ok(())
}

/// Replace the scope-file set.
pub async fn replace_scope_files(
    pool: &PgPool,
    project_id: DbId,
    links: &[String],
) -> AppResult<()> {
    let mut tx = pool.begin().await.map_err(AppError::Database)?;
    require_project(&mut *tx, project_id).await?;
    ScopeRepo::replace_files(&mut *tx, project_id, links).await?;
    ProjectRepo::touch_modified(&mut *tx, project_id).await?;
    tx.commit().await.map_err(AppError::Database)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
