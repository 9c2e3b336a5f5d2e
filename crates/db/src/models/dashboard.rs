//! Dashboard aggregate counts.

use serde::Serialize;

/// Headline counts shown on the staffing dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardCounts {
    /// Freelancers whose profile is awaiting QA review.
    pub pending_qa_freelancers: i64,
    pub total_freelancers: i64,
    /// Projects whose status is neither Won nor Lost.
    pub live_projects: i64,
}
