//! Read-side projections: the assembled JSON shapes returned by GET
//! handlers. Everything here is pool-only reads; writes live in
//! [`crate::service`].

use serde::Serialize;
use sqlx::PgPool;
use stafflane_core::attribute::AttributeKind;
use stafflane_core::candidate::{CandidateSort, StageCount, count_by_stage, ALL_BUCKET};
use stafflane_core::elapsed::elapsed_time_str;
use stafflane_core::error::CoreError;
use stafflane_core::project::FALLBACK_PROJECT_STAGE;
use stafflane_core::search::{
    build_prefix_tsquery, build_tsquery, clamp_offset, DEFAULT_AUTOCOMPLETE_LIMIT,
    DEFAULT_SEARCH_LIMIT, MAX_AUTOCOMPLETE_LIMIT, MAX_SEARCH_LIMIT,
};
use stafflane_core::types::{DbId, Timestamp};

use stafflane_db::models::admin::Admin;
use stafflane_db::models::attribute::{LookupItem, SelectableItem};
use stafflane_db::models::candidate::CandidateWithFreelancer;
use stafflane_db::models::client::{Client, ClientContact};
use stafflane_db::models::note::NoteWithAuthor;
use stafflane_db::models::project::MasterProject;
use stafflane_db::models::scope::{ScopeFile, ScopeLink};
use stafflane_db::models::search::AutocompleteHit;
use stafflane_db::repositories::attribute_repo::AttributeRepo;
use stafflane_db::repositories::candidate_repo::CandidateRepo;
use stafflane_db::repositories::client_repo::ClientRepo;
use stafflane_db::repositories::feedback_repo::FeedbackRepo;
use stafflane_db::repositories::index_repo::IndexRepo;
use stafflane_db::repositories::lookup_repo::LookupRepo;
use stafflane_db::repositories::membership_repo::MembershipRepo;
use stafflane_db::repositories::note_repo::NoteRepo;
use stafflane_db::repositories::project_repo::ProjectRepo;

use crate::error::AppResult;

/// The funnel template that backs candidate-count bucketing.
const DEFAULT_STAGE_TEMPLATE: DbId = 1;

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// Timestamp display format used across detail views.
const DISPLAY_TS_FORMAT: &str = "%d %B %Y, %I:%M %p";

fn format_display_ts(ts: Timestamp) -> String {
    ts.format(DISPLAY_TS_FORMAT).to_string()
}

/// Display name for a note author: admin name when known, otherwise the
/// local part of the email, otherwise "Unknown" (ownerless legacy note).
fn author_display(name: Option<&str>, email: Option<&str>) -> String {
    if let Some(name) = name {
        return name.to_string();
    }
    match email {
        Some(email) => email.split('@').next().unwrap_or(email).to_string(),
        None => "Unknown".to_string(),
    }
}

/// Stage reported on detail views. The status column is nullable free
/// text; unset projects read as the fallback stage.
fn project_stage(status: Option<&str>) -> String {
    status.unwrap_or(FALLBACK_PROJECT_STAGE).to_string()
}

/// Convert inclusive `[start, end]` window parameters into LIMIT/OFFSET.
fn window(start: Option<i64>, end: Option<i64>) -> (i64, i64) {
    let offset = clamp_offset(start);
    let end = end.unwrap_or(offset + DEFAULT_SEARCH_LIMIT - 1).max(offset);
    let limit = (end - offset + 1).min(MAX_SEARCH_LIMIT);
    (limit, offset)
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

/// A note as displayed on detail pages.
#[derive(Debug, Serialize)]
pub struct NoteView {
    pub id: DbId,
    pub admin_id: Option<DbId>,
    pub note: String,
    pub created_by: String,
    pub time_elapsed: String,
    pub created_at: Timestamp,
}

fn note_view(n: NoteWithAuthor) -> NoteView {
    NoteView {
        id: n.id,
        admin_id: n.admin_id,
        created_by: author_display(n.author_name.as_deref(), n.author_email.as_deref()),
        time_elapsed: elapsed_time_str(n.created_at),
        created_at: n.created_at,
        note: n.note,
    }
}

/// Notes for a project, newest first, with author display fields.
pub async fn project_notes(pool: &PgPool, project_id: DbId) -> AppResult<Vec<NoteView>> {
    let notes = NoteRepo::list_for_project(pool, project_id).await?;
    Ok(notes.into_iter().map(note_view).collect())
}

/// Notes for a freelancer, newest first.
pub async fn freelancer_notes(pool: &PgPool, freelancer_id: DbId) -> AppResult<Vec<NoteView>> {
    let notes = NoteRepo::list_for_freelancer(pool, freelancer_id).await?;
    Ok(notes.into_iter().map(note_view).collect())
}

// ---------------------------------------------------------------------------
// Project detail
// ---------------------------------------------------------------------------

/// The full project detail page payload.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: MasterProject,
    pub project_stage: String,
    pub created_at_display: String,
    pub modified_at_display: String,
    pub start_date_display: Option<String>,
    pub client: Option<Client>,
    pub expertise: Vec<LookupItem>,
    pub sectors: Vec<LookupItem>,
    pub scope_files: Vec<ScopeFile>,
    pub scope_links: Vec<ScopeLink>,
    pub members: Vec<Admin>,
    pub directors: Vec<Admin>,
    pub stakeholders: Vec<ClientContact>,
    pub note_list: Vec<NoteView>,
    pub total_candidates: i64,
}

/// Assemble the project detail view, or NotFound.
pub async fn project_detail(pool: &PgPool, project_id: DbId) -> AppResult<ProjectDetail> {
    use stafflane_db::repositories::scope_repo::ScopeRepo;

    let project = ProjectRepo::find_by_id(pool, project_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        })?;

    let client = match project.client_id {
        Some(client_id) => ClientRepo::find_by_id(pool, client_id).await?,
        None => None,
    };
    let expertise = AttributeRepo::list(pool, project_id, AttributeKind::Expertise).await?;
    let sectors = AttributeRepo::list(pool, project_id, AttributeKind::Sector).await?;
    let scope_files = ScopeRepo::list_files(pool, project_id).await?;
    let scope_links = ScopeRepo::list_links(pool, project_id).await?;
    let members = MembershipRepo::list_members(pool, project_id).await?;
    let directors = MembershipRepo::list_directors(pool, project_id).await?;
    let stakeholders = MembershipRepo::list_stakeholders(pool, project_id).await?;
    let note_list = project_notes(pool, project_id).await?;
    let total_candidates = CandidateRepo::count_for_project(pool, project_id).await?;

    Ok(ProjectDetail {
        project_stage: project_stage(project.project_status.as_deref()),
        created_at_display: format_display_ts(project.created_at),
        modified_at_display: format_display_ts(project.modified_at),
        start_date_display: project
            .project_start_date
            .map(|d| d.format("%d %B %Y").to_string()),
        client,
        expertise,
        sectors,
        scope_files,
        scope_links,
        members,
        directors,
        stakeholders,
        note_list,
        total_candidates,
        project,
    })
}

// ---------------------------------------------------------------------------
// Project listing / search
// ---------------------------------------------------------------------------

/// A page of projects plus the pre-pagination total.
#[derive(Debug, Serialize)]
pub struct ProjectList {
    pub projects: Vec<MasterProject>,
    pub count: i64,
}

/// List projects newest first. `q` narrows through the full-text index,
/// `filter_stage` by exact status, `admin_id` to projects the admin
/// directs or staffs; all combine. `count` is computed before the
/// `[start, end]` window is applied.
pub async fn list_projects(
    pool: &PgPool,
    q: Option<&str>,
    filter_stage: Option<&str>,
    admin_id: Option<DbId>,
    start: Option<i64>,
    end: Option<i64>,
) -> AppResult<ProjectList> {
    let hit_ids = match q.and_then(build_tsquery) {
        Some(tsquery) => Some(IndexRepo::search_ids(pool, &tsquery).await?),
        None => {
            // A non-empty query that sanitizes to nothing matches nothing.
            if q.is_some_and(|q| !q.trim().is_empty()) {
                Some(Vec::new())
            } else {
                None
            }
        }
    };
    let (limit, offset) = window(start, end);
    let projects = ProjectRepo::list(
        pool,
        filter_stage,
        admin_id,
        hit_ids.as_deref(),
        limit,
        offset,
    )
    .await?;
    let count = ProjectRepo::count(pool, filter_stage, admin_id, hit_ids.as_deref()).await?;
    Ok(ProjectList { projects, count })
}

/// Prefix autocomplete over project titles.
pub async fn autocomplete(
    pool: &PgPool,
    q: &str,
    limit: Option<i64>,
) -> AppResult<Vec<AutocompleteHit>> {
    let Some(tsquery) = build_prefix_tsquery(q) else {
        return Ok(Vec::new());
    };
    let limit = stafflane_core::search::clamp_limit(
        limit,
        DEFAULT_AUTOCOMPLETE_LIMIT,
        MAX_AUTOCOMPLETE_LIMIT,
    );
    Ok(IndexRepo::autocomplete(pool, &tsquery, limit).await?)
}

/// An autocomplete hit annotated with the freelancer's assignment state.
#[derive(Debug, Serialize)]
pub struct AssignAutocompleteHit {
    pub project_id: DbId,
    pub title: String,
    pub client_name: Option<String>,
    pub assigned: bool,
    pub stage: Option<String>,
}

/// Autocomplete for the "add to project" picker: each hit carries
/// whether the freelancer is already on that project and at which stage.
pub async fn assign_autocomplete(
    pool: &PgPool,
    freelancer_id: DbId,
    q: &str,
    limit: Option<i64>,
) -> AppResult<Vec<AssignAutocompleteHit>> {
    let hits = autocomplete(pool, q, limit).await?;
    let stages = CandidateRepo::stages_by_project(pool, freelancer_id).await?;
    Ok(hits
        .into_iter()
        .map(|hit| {
            let stage = stages
                .iter()
                .find(|(project_id, _)| *project_id == hit.keyword_id)
                .map(|(_, stage)| stage.clone());
            AssignAutocompleteHit {
                project_id: hit.keyword_id,
                title: hit.keyword,
                client_name: hit.client_name,
                assigned: stage.is_some(),
                stage,
            }
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Candidates
// ---------------------------------------------------------------------------

/// A page of the project funnel plus the total non-removed headcount.
#[derive(Debug, Serialize)]
pub struct CandidateList {
    pub candidates: Vec<CandidateWithFreelancer>,
    pub count: i64,
}

/// List a project's candidates. `status` narrows to one stage ("All" or
/// absent spans every non-removed stage); `sort` is a sign-prefixed key,
/// unknown values keep insertion order.
pub async fn project_candidates(
    pool: &PgPool,
    project_id: DbId,
    status: Option<&str>,
    sort: Option<&str>,
    start: Option<i64>,
    end: Option<i64>,
) -> AppResult<CandidateList> {
    let stage = status.filter(|s| *s != ALL_BUCKET);
    let sort = sort.and_then(CandidateSort::parse);
    let (limit, offset) = window(start, end);
    let candidates =
        CandidateRepo::list_for_project(pool, project_id, stage, sort, limit, offset).await?;
    let count = CandidateRepo::count_for_project(pool, project_id).await?;
    Ok(CandidateList { candidates, count })
}

/// Bucket a project's candidates by funnel stage, "All" bucket first.
pub async fn candidate_counts(pool: &PgPool, project_id: DbId) -> AppResult<Vec<StageCount>> {
    let stages = CandidateRepo::stages_for_project(pool, project_id).await?;
    let template = LookupRepo::template_stages(pool, DEFAULT_STAGE_TEMPLATE).await?;
    let stage_refs: Vec<&str> = stages.iter().map(String::as_str).collect();
    Ok(count_by_stage(&stage_refs, &template))
}

/// One row of a freelancer's project history.
#[derive(Debug, Serialize)]
pub struct FreelancerProject {
    pub candidate_id: DbId,
    pub project_id: DbId,
    pub project_name: Option<String>,
    pub stage: String,
    pub rejected: bool,
    pub added_on: Timestamp,
    pub time_elapsed: String,
}

/// Every project a freelancer is mapped to, newest first. Deleted
/// projects keep the mapping row but lose their name.
pub async fn freelancer_projects(
    pool: &PgPool,
    freelancer_id: DbId,
) -> AppResult<Vec<FreelancerProject>> {
    let mappings = CandidateRepo::list_for_freelancer(pool, freelancer_id).await?;
    let ids: Vec<DbId> = mappings.iter().map(|c| c.project_id).collect();
    let projects = ProjectRepo::find_by_ids(pool, &ids).await?;
    Ok(mappings
        .into_iter()
        .map(|c| FreelancerProject {
            candidate_id: c.id,
            project_name: projects
                .iter()
                .find(|p| p.id == c.project_id)
                .map(|p| p.name.clone()),
            project_id: c.project_id,
            stage: c.stage,
            rejected: c.rejected,
            time_elapsed: elapsed_time_str(c.added_on),
            added_on: c.added_on,
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Feedback form
// ---------------------------------------------------------------------------

/// Both feedback vocabularies flagged with the project's selections.
#[derive(Debug, Serialize)]
pub struct FeedbackView {
    pub scales: Vec<SelectableItem>,
    pub criteria: Vec<SelectableItem>,
}

pub async fn project_feedback(pool: &PgPool, project_id: DbId) -> AppResult<FeedbackView> {
    Ok(FeedbackView {
        scales: FeedbackRepo::scales(pool, project_id).await?,
        criteria: FeedbackRepo::criteria(pool, project_id).await?,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_display_prefers_name() {
        assert_eq!(
            author_display(Some("Dana Meyer"), Some("dana@corp.test")),
            "Dana Meyer"
        );
    }

    #[test]
    fn author_display_falls_back_to_email_local_part() {
        assert_eq!(author_display(None, Some("dana.meyer@corp.test")), "dana.meyer");
    }

    #[test]
    fn author_display_unknown_when_ownerless() {
        assert_eq!(author_display(None, None), "Unknown");
    }

    #[test]
    fn stage_falls_back_when_unset() {
        assert_eq!(project_stage(Some("Won")), "Won");
        assert_eq!(project_stage(None), FALLBACK_PROJECT_STAGE);
    }

    #[test]
    fn window_is_inclusive_end() {
        assert_eq!(window(Some(0), Some(9)), (10, 0));
        assert_eq!(window(Some(20), Some(39)), (20, 20));
    }

    #[test]
    fn window_defaults() {
        assert_eq!(window(None, None), (DEFAULT_SEARCH_LIMIT, 0));
    }

    #[test]
    fn window_clamps_degenerate_ranges() {
        // end before start collapses to a single row
        assert_eq!(window(Some(10), Some(5)), (1, 10));
        assert_eq!(window(Some(0), Some(100_000)), (MAX_SEARCH_LIMIT, 0));
    }
}
