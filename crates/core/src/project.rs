//! Master-project constants and validation functions.
//!
//! Provides the project-type / duration / budget vocabularies, the staffing
//! funnel stage allow-list, and the cross-field checks applied by the
//! project upsert path.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Valid engagement types for a master project.
pub const PROJECT_TYPES: &[&str] = &["freelance", "firm", "rfp"];

/// Valid units for the engagement duration.
pub const DURATION_UNITS: &[&str] = &["days", "weeks", "months", "years"];

/// Valid units for the budget figure.
pub const BUDGET_UNITS: &[&str] = &["hour", "day", "week", "month", "year", "project"];

/// The staffing funnel stages a project can occupy.
///
/// Enforced only by the dedicated stage-transition operation; the status
/// column itself is free text everywhere else.
pub const PROJECT_STAGES: &[&str] = &[
    "Market Scan",
    "Selection",
    "Matching",
    "Contracting",
    "Won",
    "Lost",
];

/// Status assigned to a newly created project when none is supplied.
pub const DEFAULT_PROJECT_STATUS: &str = "Market Scan";

/// Stage reported for a project whose status column is unset.
pub const FALLBACK_PROJECT_STAGE: &str = "Matching";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a stage value against the fixed allow-list.
pub fn validate_project_stage(stage: &str) -> Result<(), String> {
    if PROJECT_STAGES.contains(&stage) {
        Ok(())
    } else {
        Err(format!(
            "Invalid stage value, allowed values are: {}",
            PROJECT_STAGES.join(", ")
        ))
    }
}

/// Validate a project type against the fixed vocabulary.
pub fn validate_project_type(project_type: &str) -> Result<(), String> {
    if PROJECT_TYPES.contains(&project_type) {
        Ok(())
    } else {
        Err(format!(
            "Invalid project type '{project_type}'. Must be one of: {}",
            PROJECT_TYPES.join(", ")
        ))
    }
}

/// Require `min < max` when both experience bounds are present.
pub fn validate_experience_range(min: Option<i32>, max: Option<i32>) -> Result<(), String> {
    if let (Some(min), Some(max)) = (min, max) {
        if min >= max {
            return Err(
                "Max experience required should be greater than min experience".to_string(),
            );
        }
    }
    Ok(())
}

/// Freelance engagements must state how many freelancers are needed.
pub fn validate_freelance_headcount(
    project_type: Option<&str>,
    no_of_freelancers: Option<i32>,
) -> Result<(), String> {
    if project_type == Some("freelance") && no_of_freelancers.is_none() {
        return Err("Number of freelancers not provided".to_string());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_project_stage ----------------------------------------------

    #[test]
    fn all_six_stages_accepted() {
        for stage in PROJECT_STAGES {
            assert!(validate_project_stage(stage).is_ok(), "{stage} rejected");
        }
    }

    #[test]
    fn unknown_stage_rejected() {
        let result = validate_project_stage("Shortlist");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("allowed values"));
    }

    #[test]
    fn stage_check_is_case_sensitive() {
        assert!(validate_project_stage("won").is_err());
        assert!(validate_project_stage("MARKET SCAN").is_err());
    }

    #[test]
    fn empty_stage_rejected() {
        assert!(validate_project_stage("").is_err());
    }

    // -- validate_project_type -----------------------------------------------

    #[test]
    fn known_project_types_accepted() {
        assert!(validate_project_type("freelance").is_ok());
        assert!(validate_project_type("firm").is_ok());
        assert!(validate_project_type("rfp").is_ok());
    }

    #[test]
    fn unknown_project_type_rejected() {
        assert!(validate_project_type("contract").is_err());
    }

    // -- validate_experience_range -------------------------------------------

    #[test]
    fn valid_range_accepted() {
        assert!(validate_experience_range(Some(2), Some(5)).is_ok());
    }

    #[test]
    fn equal_bounds_rejected() {
        assert!(validate_experience_range(Some(3), Some(3)).is_err());
    }

    #[test]
    fn inverted_bounds_rejected() {
        assert!(validate_experience_range(Some(8), Some(4)).is_err());
    }

    #[test]
    fn missing_bound_skips_check() {
        assert!(validate_experience_range(Some(8), None).is_ok());
        assert!(validate_experience_range(None, Some(1)).is_ok());
        assert!(validate_experience_range(None, None).is_ok());
    }

    // -- validate_freelance_headcount ----------------------------------------

    #[test]
    fn freelance_without_headcount_rejected() {
        let result = validate_freelance_headcount(Some("freelance"), None);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Number of freelancers"));
    }

    #[test]
    fn freelance_with_headcount_accepted() {
        assert!(validate_freelance_headcount(Some("freelance"), Some(3)).is_ok());
    }

    #[test]
    fn non_freelance_without_headcount_accepted() {
        assert!(validate_freelance_headcount(Some("firm"), None).is_ok());
        assert!(validate_freelance_headcount(None, None).is_ok());
    }
}
