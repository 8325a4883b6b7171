//! The scoring pipeline: AI primary path, heuristic fallback, one outcome.

use serde_json::Value;
use tracing::warn;

use crate::provider::{AiProvider, ProviderError};
use crate::scoring::fallback::fallback_score;
use crate::scoring::prompts::{SCORING_PROMPT_TEMPLATE, SCORING_SYSTEM};
use crate::scoring::{Recommendation, ScoreSource, ScoringOutcome, ScoringResult};

/// Candidate attributes the scorer needs. Built from a stored row or from
/// ad hoc tool input; the pipeline does not care which.
#[derive(Debug, Clone)]
pub struct CandidateProfile {
    pub name: String,
    pub skills: Vec<String>,
    pub experience_years: i32,
    pub summary: String,
}

#[derive(Debug, Clone)]
pub struct JobRequirements {
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub experience_required: i32,
}

/// Produces a scoring result for a (candidate, job) pair. Infallible: any
/// provider error is logged and replaced by the deterministic fallback.
pub async fn score_candidate(
    provider: &dyn AiProvider,
    candidate: &CandidateProfile,
    job: &JobRequirements,
) -> ScoringOutcome {
    match ai_score(provider, candidate, job).await {
        Ok(result) => ScoringOutcome {
            result,
            source: ScoreSource::Ai,
        },
        Err(e) => {
            warn!("AI scoring failed, using fallback: {e}");
            ScoringOutcome {
                result: fallback_score(
                    &candidate.skills,
                    candidate.experience_years,
                    &job.required_skills,
                    job.experience_required,
                ),
                source: ScoreSource::Fallback,
            }
        }
    }
}

async fn ai_score(
    provider: &dyn AiProvider,
    candidate: &CandidateProfile,
    job: &JobRequirements,
) -> Result<ScoringResult, ProviderError> {
    let summary = if candidate.summary.trim().is_empty() {
        "N/A"
    } else {
        candidate.summary.as_str()
    };
    let prompt = SCORING_PROMPT_TEMPLATE
        .replace("{candidate_name}", &candidate.name)
        .replace("{candidate_skills}", &candidate.skills.join(", "))
        .replace(
            "{candidate_experience}",
            &candidate.experience_years.to_string(),
        )
        .replace("{candidate_summary}", summary)
        .replace("{job_title}", &job.title)
        .replace("{job_description}", &job.description)
        .replace("{required_skills}", &job.required_skills.join(", "))
        .replace(
            "{experience_required}",
            &job.experience_required.to_string(),
        );

    let value = provider.generate_json(&prompt, SCORING_SYSTEM).await?;
    Ok(validate_scoring(&value))
}

/// Applies field-level defaults and clamps to whatever the model returned.
/// Never fails: a structurally valid JSON value always yields a result.
pub fn validate_scoring(value: &Value) -> ScoringResult {
    let match_score = value
        .get("matchScore")
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
        .clamp(0.0, 100.0)
        .round() as i32;

    ScoringResult {
        match_score,
        strength_areas: string_list(value.get("strengthAreas")),
        missing_skills: string_list(value.get("missingSkills")),
        recommendation: Recommendation::from_label(
            value
                .get("recommendation")
                .and_then(Value::as_str)
                .unwrap_or("review"),
        ),
        reasoning: value
            .get("reasoning")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    /// Stub provider returning a fixed JSON value.
    struct FixedProvider(Value);

    #[async_trait]
    impl AiProvider for FixedProvider {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn generate_json(&self, _: &str, _: &str) -> Result<Value, ProviderError> {
            Ok(self.0.clone())
        }
    }

    /// Stub provider that always fails.
    struct DownProvider;

    #[async_trait]
    impl AiProvider for DownProvider {
        fn name(&self) -> &'static str {
            "down"
        }

        async fn generate_json(&self, _: &str, _: &str) -> Result<Value, ProviderError> {
            Err(ProviderError::Unavailable("no credentials".to_string()))
        }
    }

    fn candidate() -> CandidateProfile {
        CandidateProfile {
            name: "Ada".to_string(),
            skills: vec!["Python".to_string(), "SQL".to_string()],
            experience_years: 2,
            summary: String::new(),
        }
    }

    fn job() -> JobRequirements {
        JobRequirements {
            title: "Backend Engineer".to_string(),
            description: "Build services".to_string(),
            required_skills: vec![
                "Python".to_string(),
                "Django".to_string(),
                "SQL".to_string(),
            ],
            experience_required: 3,
        }
    }

    #[tokio::test]
    async fn test_ai_path_produces_ai_source() {
        let provider = FixedProvider(json!({
            "matchScore": 85,
            "strengthAreas": ["python"],
            "missingSkills": ["django"],
            "recommendation": "shortlisted",
            "reasoning": "Strong overlap"
        }));
        let outcome = score_candidate(&provider, &candidate(), &job()).await;
        assert_eq!(outcome.source, ScoreSource::Ai);
        assert_eq!(outcome.result.match_score, 85);
        assert_eq!(outcome.result.recommendation, Recommendation::Shortlisted);
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back_deterministically() {
        let outcome = score_candidate(&DownProvider, &candidate(), &job()).await;
        assert_eq!(outcome.source, ScoreSource::Fallback);
        // Reference scenario from the heuristic: 67.
        assert_eq!(outcome.result.match_score, 67);
        assert_eq!(outcome.result.recommendation, Recommendation::Review);
        assert_eq!(outcome.result.reasoning, "Basic scoring algorithm");
    }

    #[tokio::test]
    async fn test_out_of_range_ai_score_is_clamped() {
        let provider = FixedProvider(json!({ "matchScore": 250 }));
        let outcome = score_candidate(&provider, &candidate(), &job()).await;
        assert_eq!(outcome.result.match_score, 100);

        let provider = FixedProvider(json!({ "matchScore": -10 }));
        let outcome = score_candidate(&provider, &candidate(), &job()).await;
        assert_eq!(outcome.result.match_score, 0);
    }

    #[tokio::test]
    async fn test_missing_ai_fields_take_defaults() {
        let provider = FixedProvider(json!({}));
        let outcome = score_candidate(&provider, &candidate(), &job()).await;
        assert_eq!(outcome.source, ScoreSource::Ai);
        assert_eq!(outcome.result.match_score, 0);
        assert!(outcome.result.strength_areas.is_empty());
        assert!(outcome.result.missing_skills.is_empty());
        assert_eq!(outcome.result.recommendation, Recommendation::Review);
        assert_eq!(outcome.result.reasoning, "");
    }

    #[test]
    fn test_validate_scoring_rounds_fractional_scores() {
        let result = validate_scoring(&json!({ "matchScore": 66.6 }));
        assert_eq!(result.match_score, 67);
    }

    #[test]
    fn test_validate_scoring_ignores_non_string_array_entries() {
        let result = validate_scoring(&json!({
            "strengthAreas": ["python", 42, null, "sql"]
        }));
        assert_eq!(result.strength_areas, vec!["python", "sql"]);
    }

    #[test]
    fn test_validate_scoring_unknown_recommendation_defaults_to_review() {
        let result = validate_scoring(&json!({ "recommendation": "hire immediately" }));
        assert_eq!(result.recommendation, Recommendation::Review);
    }
}
