//! Deterministic heuristic scorer, used whenever the AI path fails.
//!
//! Skill matching is a case-insensitive bidirectional substring test. That
//! is intentionally lenient and can produce false positives ("C" matches
//! "C++"); the looseness is part of the contract, not a bug to fix here.

use crate::scoring::{Recommendation, ScoringResult};

const SKILL_WEIGHT: f64 = 0.7;
const EXPERIENCE_CAP: f64 = 30.0;
pub const FALLBACK_REASONING: &str = "Basic scoring algorithm";

/// Bidirectional substring match over already-lowercased skills.
fn skills_overlap(required: &str, candidate: &str) -> bool {
    candidate.contains(required) || required.contains(candidate)
}

/// Computes the heuristic score. Pure and idempotent: identical inputs
/// always yield identical results.
pub fn fallback_score(
    candidate_skills: &[String],
    candidate_experience: i32,
    required_skills: &[String],
    experience_required: i32,
) -> ScoringResult {
    let candidate_lower: Vec<String> = candidate_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let required_lower: Vec<String> = required_skills.iter().map(|s| s.to_lowercase()).collect();

    let (matched, missing): (Vec<String>, Vec<String>) = required_lower
        .into_iter()
        .partition(|req| candidate_lower.iter().any(|cand| skills_overlap(req, cand)));

    let skill_match_percentage = if required_skills.is_empty() {
        0.0
    } else {
        matched.len() as f64 / required_skills.len() as f64 * 100.0
    };

    // Guard the division: a job with no experience floor contributes 0,
    // never NaN or infinity.
    let experience_score = if experience_required <= 0 {
        0.0
    } else {
        (f64::from(candidate_experience.max(0)) / f64::from(experience_required)
            * EXPERIENCE_CAP)
            .min(EXPERIENCE_CAP)
    };

    let match_score =
        (skill_match_percentage * SKILL_WEIGHT + experience_score).min(100.0).round() as i32;

    ScoringResult {
        match_score,
        strength_areas: matched,
        missing_skills: missing,
        recommendation: Recommendation::Review,
        reasoning: FALLBACK_REASONING.to_string(),
    }
}
