use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Candidate lifecycle: `pending` on upload, then one of `review`,
/// `shortlisted` or `rejected` once scored.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_REVIEW: &str = "review";
pub const STATUS_SHORTLISTED: &str = "shortlisted";
pub const STATUS_REJECTED: &str = "rejected";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRow {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Weak reference: becomes NULL if the job is deleted.
    pub job_id: Option<Uuid>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub resume_text: Option<String>,
    /// Ordered as extracted; duplicates are not deduplicated.
    pub skills: Vec<String>,
    pub experience_years: i32,
    pub education: Option<String>,
    pub summary: Option<String>,
    /// NULL until the candidate has been scored; in [0,100] once set.
    pub match_score: Option<i32>,
    pub strength_areas: Vec<String>,
    pub missing_skills: Vec<String>,
    pub ai_reasoning: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Fields for inserting a freshly parsed candidate.
#[derive(Debug, Clone)]
pub struct NewCandidate {
    pub user_id: Uuid,
    pub job_id: Option<Uuid>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub resume_text: String,
    pub skills: Vec<String>,
    pub experience_years: i32,
    pub education: Option<String>,
    pub summary: Option<String>,
}

/// Projection of a `ScoringResult` onto the candidate's mutable fields.
/// All four scoring fields plus the mapped status are written together.
#[derive(Debug, Clone)]
pub struct ScoreUpdate {
    pub match_score: i32,
    pub strength_areas: Vec<String>,
    pub missing_skills: Vec<String>,
    pub status: String,
    pub reasoning: String,
}
