//! Candidate scoring: AI-backed with a deterministic fallback.
//!
//! `score_candidate` never fails: the primary path asks the configured AI
//! provider, and any provider error drops to the keyword-overlap heuristic
//! in `fallback`. Which path ran is recorded on the outcome.

use serde::{Deserialize, Serialize};

pub mod fallback;
pub mod handlers;
pub mod pipeline;
pub mod prompts;

use crate::models::candidate::{
    ScoreUpdate, STATUS_REJECTED, STATUS_REVIEW, STATUS_SHORTLISTED,
};

/// Categorical scoring outcome. Unknown labels parse to `Review`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Shortlisted,
    Review,
    Rejected,
}

impl Recommendation {
    /// Lenient parse for model output; anything unrecognized is `Review`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "shortlisted" => Recommendation::Shortlisted,
            "rejected" => Recommendation::Rejected,
            _ => Recommendation::Review,
        }
    }

    /// Deterministic recommendation→status mapping.
    pub fn to_status(self) -> &'static str {
        match self {
            Recommendation::Shortlisted => STATUS_SHORTLISTED,
            Recommendation::Rejected => STATUS_REJECTED,
            Recommendation::Review => STATUS_REVIEW,
        }
    }
}

/// Full scoring report for a (candidate, job) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    /// Integer in [0,100], whichever path produced it.
    pub match_score: i32,
    pub strength_areas: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendation: Recommendation,
    pub reasoning: String,
}

impl ScoringResult {
    pub fn to_update(&self) -> ScoreUpdate {
        ScoreUpdate {
            match_score: self.match_score,
            strength_areas: self.strength_areas.clone(),
            missing_skills: self.missing_skills.clone(),
            status: self.recommendation.to_status().to_string(),
            reasoning: self.reasoning.clone(),
        }
    }
}

/// Which path produced the result. Surfaced so callers and tests can tell
/// an AI score from the heuristic, instead of hiding the distinction in
/// swallowed errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSource {
    Ai,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct ScoringOutcome {
    pub result: ScoringResult,
    pub source: ScoreSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_mapping_shortlisted() {
        assert_eq!(Recommendation::Shortlisted.to_status(), "shortlisted");
    }

    #[test]
    fn test_recommendation_mapping_rejected() {
        assert_eq!(Recommendation::Rejected.to_status(), "rejected");
    }

    #[test]
    fn test_recommendation_mapping_review() {
        assert_eq!(Recommendation::Review.to_status(), "review");
    }

    #[test]
    fn test_unknown_label_parses_to_review() {
        assert_eq!(
            Recommendation::from_label("strong hire"),
            Recommendation::Review
        );
        assert_eq!(Recommendation::from_label(""), Recommendation::Review);
    }

    #[test]
    fn test_label_parse_is_case_insensitive() {
        assert_eq!(
            Recommendation::from_label("Shortlisted"),
            Recommendation::Shortlisted
        );
        assert_eq!(
            Recommendation::from_label("REJECTED"),
            Recommendation::Rejected
        );
    }

    #[test]
    fn test_recommendation_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Recommendation::Shortlisted).unwrap(),
            r#""shortlisted""#
        );
    }

    #[test]
    fn test_score_update_carries_all_four_fields_and_status() {
        let result = ScoringResult {
            match_score: 72,
            strength_areas: vec!["python".to_string()],
            missing_skills: vec!["django".to_string()],
            recommendation: Recommendation::Shortlisted,
            reasoning: "Solid overlap".to_string(),
        };
        let update = result.to_update();
        assert_eq!(update.match_score, 72);
        assert_eq!(update.strength_areas, vec!["python"]);
        assert_eq!(update.missing_skills, vec!["django"]);
        assert_eq!(update.status, "shortlisted");
        assert_eq!(update.reasoning, "Solid overlap");
    }
}
