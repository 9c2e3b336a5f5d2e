//! Candidate-pipeline constants, sort-key parsing, and stage bucketing.

use serde::Serialize;

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Stage assigned to a freshly added candidate mapping.
pub const DEFAULT_CANDIDATE_STAGE: &str = "Longlist";

/// Candidates in this stage are excluded from every listing and count.
pub const REMOVED_STAGE: &str = "Remove from project";

/// The synthetic count bucket spanning all non-removed stages.
pub const ALL_BUCKET: &str = "All";

/// Profile status stamped on a freelancer when they are added to a project.
pub const ACCEPTED_PROFILE_STATUS: &str = "Accepted";

/// Interview status a freelancer resets to when moved back to the
/// default stage.
pub const PENDING_INTERVIEW_STATUS: &str = "Pending";

// ---------------------------------------------------------------------------
// Sort keys
// ---------------------------------------------------------------------------

/// Candidate list sort orders selectable by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSortKey {
    /// By freelancer name.
    Alphabetical,
    /// By freelancer profile creation time.
    Created,
    /// By freelancer profile modification time.
    Modified,
    /// By the time the candidate was added to the project.
    AddedToProject,
}

/// A parsed sort specifier: key plus direction.
///
/// A leading `-` selects descending order (`"-alphabetical"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSort {
    pub key: CandidateSortKey,
    pub descending: bool,
}

impl CandidateSort {
    /// Parse a sign-prefixed sort key. Unknown keys yield `None` and the
    /// caller keeps the unsorted order.
    pub fn parse(sort: &str) -> Option<Self> {
        let descending = sort.starts_with('-');
        let key = sort.trim_start_matches('-');
        let key = match key {
            "alphabetical" => CandidateSortKey::Alphabetical,
            "created" => CandidateSortKey::Created,
            "modified" => CandidateSortKey::Modified,
            "added_to_project" => CandidateSortKey::AddedToProject,
            _ => return None,
        };
        Some(CandidateSort { key, descending })
    }
}

// ---------------------------------------------------------------------------
// Stage bucketing
// ---------------------------------------------------------------------------

/// A funnel stage from the externally supplied stage template.
#[derive(Debug, Clone)]
pub struct TemplateStage {
    pub id: DbId,
    pub name: String,
}

/// A candidate count bucket for one funnel stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageCount {
    pub stage_id: Option<DbId>,
    pub stage_name: String,
    pub count: i64,
}

/// Bucket candidate stages against a funnel template.
///
/// The first bucket is the "All" bucket counting every candidate whose
/// stage is not [`REMOVED_STAGE`]; one bucket per template stage follows,
/// counting exact stage matches.
pub fn count_by_stage(stages: &[&str], template: &[TemplateStage]) -> Vec<StageCount> {
    let mut counts = vec![StageCount {
        stage_id: None,
        stage_name: ALL_BUCKET.to_string(),
        count: stages.iter().filter(|s| **s != REMOVED_STAGE).count() as i64,
    }];
    for stage in template {
        counts.push(StageCount {
            stage_id: Some(stage.id),
            stage_name: stage.name.clone(),
            count: stages.iter().filter(|s| **s == stage.name).count() as i64,
        });
    }
    counts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn template(names: &[(&str, DbId)]) -> Vec<TemplateStage> {
        names
            .iter()
            .map(|(name, id)| TemplateStage {
                id: *id,
                name: name.to_string(),
            })
            .collect()
    }

    // -- CandidateSort::parse ------------------------------------------------

    #[test]
    fn parse_ascending_keys() {
        let sort = CandidateSort::parse("alphabetical").unwrap();
        assert_eq!(sort.key, CandidateSortKey::Alphabetical);
        assert!(!sort.descending);

        assert_eq!(
            CandidateSort::parse("added_to_project").unwrap().key,
            CandidateSortKey::AddedToProject
        );
    }

    #[test]
    fn parse_descending_prefix() {
        let sort = CandidateSort::parse("-created").unwrap();
        assert_eq!(sort.key, CandidateSortKey::Created);
        assert!(sort.descending);
    }

    #[test]
    fn parse_unknown_key_returns_none() {
        assert!(CandidateSort::parse("relevance").is_none());
        assert!(CandidateSort::parse("").is_none());
        assert!(CandidateSort::parse("-").is_none());
    }

    // -- count_by_stage ------------------------------------------------------

    #[test]
    fn all_bucket_excludes_removed_stage() {
        let stages = [
            "Longlist",
            "Longlist",
            "Selected",
            REMOVED_STAGE,
            REMOVED_STAGE,
            REMOVED_STAGE,
        ];
        let tpl = template(&[("Longlist", 1), ("Selected", 2)]);

        let counts = count_by_stage(&stages, &tpl);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[0].stage_name, ALL_BUCKET);
        assert_eq!(counts[0].count, 3);
        assert_eq!(counts[1].stage_name, "Longlist");
        assert_eq!(counts[1].count, 2);
        assert_eq!(counts[2].stage_name, "Selected");
        assert_eq!(counts[2].count, 1);
    }

    #[test]
    fn template_stage_with_no_candidates_counts_zero() {
        let counts = count_by_stage(&["Longlist"], &template(&[("Won", 9)]));
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[1].count, 0);
    }

    #[test]
    fn empty_input_yields_zero_all_bucket() {
        let counts = count_by_stage(&[], &template(&[("Longlist", 1)]));
        assert_eq!(counts[0].count, 0);
        assert_eq!(counts[1].count, 0);
    }

    #[test]
    fn removed_stage_not_counted_even_when_in_template() {
        // A template that (mis)lists the removed stage still counts exact
        // matches for it, but the All bucket never includes them.
        let counts = count_by_stage(&[REMOVED_STAGE], &template(&[(REMOVED_STAGE, 5)]));
        assert_eq!(counts[0].count, 0);
        assert_eq!(counts[1].count, 1);
    }
}
