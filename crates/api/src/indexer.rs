//! Full-text index maintenance.
//!
//! Every committing write to a project re-indexes it from scratch: the
//! indexer re-reads the project with its related entities, flattens them
//! into a title / body / autocomplete triple, and upserts the document
//! rows. Index maintenance is best-effort: failures are logged and never
//! surfaced to the caller, so a write that committed is never reported as
//! failed because the index lagged.

use sqlx::PgPool;
use stafflane_core::search::{normalize_keyword, strip_trailing_punct};
use stafflane_core::types::DbId;

use stafflane_db::models::search::DocumentSource;
use stafflane_db::repositories::candidate_repo::CandidateRepo;
use stafflane_db::repositories::index_repo::IndexRepo;
use stafflane_db::repositories::project_repo::ProjectRepo;

// ---------------------------------------------------------------------------
// Document builder
// ---------------------------------------------------------------------------

/// A flattened full-text document, ready for storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectIndexDocument {
    /// Display title, `"{client} - {name}"` when the client is known.
    pub title: String,
    /// Space-joined scalar and related values, punctuation stripped.
    pub body: String,
    /// Normalized title for prefix autocomplete.
    pub ac_search_field: String,
}

/// Build the display title for a project: `"{client} - {name}"` when a
/// client is attached, otherwise the bare project name.
pub fn project_title(client_name: Option<&str>, name: &str) -> String {
    match client_name {
        Some(client) => format!("{client} - {name}"),
        None => name.to_string(),
    }
}

fn push_value(body: &mut Vec<String>, value: Option<&str>) {
    if let Some(v) = value {
        let cleaned = strip_trailing_punct(v.trim());
        if !cleaned.is_empty() {
            body.push(cleaned);
        }
    }
}

/// Flatten a loaded [`DocumentSource`] into the stored document fields.
///
/// The body collects, space-separated: the project's scalar text fields,
/// the duration and budget rendered as phrases, the client name, and the
/// names of attached skills, sectors, directors and team members.
pub fn build_project_document(source: &DocumentSource) -> ProjectIndexDocument {
    let p = &source.project;
    let title = project_title(source.client_name.as_deref(), &p.name);

    let mut parts: Vec<String> = Vec::new();
    push_value(&mut parts, Some(&p.name));
    push_value(&mut parts, p.project_type.as_deref());
    push_value(&mut parts, p.project_status.as_deref());
    push_value(&mut parts, p.background.as_deref());
    push_value(&mut parts, p.notes.as_deref());
    push_value(&mut parts, p.city.as_deref());
    push_value(&mut parts, p.country.as_deref());
    push_value(&mut parts, p.location.as_deref());
    push_value(&mut parts, p.segment.as_deref());
    push_value(&mut parts, p.sub_segment.as_deref());
    push_value(&mut parts, p.client_type.as_deref());
    push_value(&mut parts, p.closed_quarter.as_deref());
    push_value(&mut parts, p.closed_year.as_deref());
    push_value(&mut parts, p.educational_background.as_deref());

    if let (Some(count), Some(unit)) = (p.duration_count, p.duration_unit.as_deref()) {
        parts.push(format!("{count} {unit}"));
    }
    if let Some(amount) = p.budget_amount {
        let currency = p.budget_currency.as_deref().unwrap_or("");
        let unit = p.budget_unit.as_deref().unwrap_or("");
        parts.push(
            format!("{amount} {currency} {unit}")
                .trim_end()
                .to_string(),
        );
    }

    push_value(&mut parts, source.client_name.as_deref());
    for name in source
        .skills
        .iter()
        .chain(&source.sectors)
        .chain(&source.director_names)
        .chain(&source.member_names)
    {
        push_value(&mut parts, Some(name));
    }

    ProjectIndexDocument {
        ac_search_field: normalize_keyword(&title),
        body: parts.join(" "),
        title,
    }
}

// ---------------------------------------------------------------------------
// Index operations
// ---------------------------------------------------------------------------

/// Rebuild the index entry for a single project.
///
/// Returns `Ok(false)` when the project no longer exists (its documents
/// are removed instead).
pub async fn index_project(pool: &PgPool, project_id: DbId) -> Result<bool, sqlx::Error> {
    let Some(source) = IndexRepo::load_source(pool, project_id).await? else {
        IndexRepo::delete_project(pool, project_id).await?;
        return Ok(false);
    };
    let doc = build_project_document(&source);
    IndexRepo::upsert_document(
        pool,
        project_id,
        &doc.title,
        source.client_name.as_deref(),
        &doc.body,
        &doc.ac_search_field,
    )
    .await?;
    IndexRepo::upsert_project_keyword(pool, project_id, &doc.title, &doc.ac_search_field).await?;
    Ok(true)
}

/// Best-effort variant of [`index_project`] used after committed writes.
pub async fn index_project_best_effort(pool: &PgPool, project_id: DbId) {
    if let Err(err) = index_project(pool, project_id).await {
        tracing::warn!(project_id, error = %err, "Project index refresh failed");
    }
}

/// Rebuild the index for many projects (or all live projects when `ids`
/// is `None`). With `keep_index` false the index is wiped first so stale
/// documents for deleted projects disappear. Returns the number of
/// projects indexed.
pub async fn index_all_projects(
    pool: &PgPool,
    ids: Option<&[DbId]>,
    keep_index: bool,
) -> Result<usize, sqlx::Error> {
    let targets = match ids {
        Some(ids) => ids.to_vec(),
        None => ProjectRepo::all_ids(pool).await?,
    };
    if !keep_index {
        IndexRepo::wipe(pool).await?;
    }
    let mut indexed = 0;
    for project_id in targets {
        if index_project(pool, project_id).await? {
            indexed += 1;
        }
    }
    Ok(indexed)
}

/// Refresh the documents of every project a freelancer is mapped to,
/// best-effort. Candidate changes alter no document content today but
/// keep `indexed_at` honest for diagnostics.
pub async fn index_freelancer_projects(pool: &PgPool, freelancer_id: DbId) {
    let project_ids = match CandidateRepo::project_ids_for_freelancer(pool, freelancer_id).await {
        Ok(ids) => ids,
        Err(err) => {
            tracing::warn!(freelancer_id, error = %err, "Freelancer project lookup failed");
            return;
        }
    };
    for project_id in project_ids {
        index_project_best_effort(pool, project_id).await;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stafflane_db::models::project::MasterProject;

    fn sample_project() -> MasterProject {
        MasterProject {
            id: 1,
            name: "Pricing Study".to_string(),
            project_type: Some("freelance".to_string()),
            background: Some("Benchmark retail pricing.".to_string()),
            notes: None,
            project_status: Some("Market Scan".to_string()),
            client_id: Some(7),
            admin_id: Some(3),
            no_of_freelancers: Some(2),
            duration_count: Some(6),
            duration_unit: Some("weeks".to_string()),
            budget_amount: Some(150.0),
            budget_currency: Some("EUR".to_string()),
            budget_unit: Some("per hour".to_string()),
            budget_notes: None,
            min_years_experience: Some(3),
            max_years_experience: Some(8),
            location: None,
            city: Some("Berlin".to_string()),
            country: Some("Germany".to_string()),
            freelancer_location_type: None,
            educational_background: None,
            project_start_date: None,
            segment: Some("Strategy".to_string()),
            sub_segment: None,
            is_client_confidential: false,
            sharepoint_link: None,
            client_type: None,
            closed_quarter: None,
            closed_year: None,
            created_at: Utc::now(),
            modified_at: Utc::now(),
        }
    }

    fn sample_source() -> DocumentSource {
        DocumentSource {
            project: sample_project(),
            client_name: Some("Acme Corp.".to_string()),
            skills: vec!["Pricing".to_string()],
            sectors: vec!["Retail".to_string()],
            director_names: vec!["Dana Meyer".to_string()],
            member_names: vec!["Jo Becker".to_string()],
        }
    }

    #[test]
    fn title_includes_client_when_present() {
        assert_eq!(
            project_title(Some("Acme Corp."), "Pricing Study"),
            "Acme Corp. - Pricing Study"
        );
        assert_eq!(project_title(None, "Pricing Study"), "Pricing Study");
    }

    #[test]
    fn document_flattens_scalars_and_relations() {
        let doc = build_project_document(&sample_source());
        assert_eq!(doc.title, "Acme Corp. - Pricing Study");
        assert!(doc.body.contains("Pricing Study"));
        assert!(doc.body.contains("Market Scan"));
        assert!(doc.body.contains("Berlin"));
        assert!(doc.body.contains("6 weeks"));
        assert!(doc.body.contains("150 EUR per hour"));
        assert!(doc.body.contains("Retail"));
        assert!(doc.body.contains("Dana Meyer"));
        assert!(doc.body.contains("Jo Becker"));
    }

    #[test]
    fn document_strips_trailing_punctuation_from_body() {
        let doc = build_project_document(&sample_source());
        assert!(doc.body.contains("Benchmark retail pricing"));
        assert!(!doc.body.contains("pricing."));
        // The display title keeps the original punctuation.
        assert!(doc.title.contains("Acme Corp."));
    }

    #[test]
    fn ac_field_is_normalized_title() {
        let doc = build_project_document(&sample_source());
        assert_eq!(doc.ac_search_field, "acme corp pricing study");
    }

    #[test]
    fn document_without_client_or_optionals() {
        let mut source = sample_source();
        source.client_name = None;
        source.project.duration_count = None;
        source.project.budget_amount = None;
        let doc = build_project_document(&source);
        assert_eq!(doc.title, "Pricing Study");
        assert_eq!(doc.ac_search_field, "pricing study");
        assert!(!doc.body.contains("weeks"));
        assert!(!doc.body.contains("EUR"));
    }
}
