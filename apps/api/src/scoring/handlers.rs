//! Axum route handlers for candidate scoring.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::CandidateRow;
use crate::scoring::pipeline::{score_candidate, CandidateProfile, JobRequirements};
use crate::scoring::ScoringResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub candidate_id: Option<Uuid>,
    pub job_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub success: bool,
    pub scoring: ScoringResult,
    pub candidate: Option<CandidateRow>,
}

/// POST /api/v1/candidates/score
///
/// Runs the scoring pipeline for a (candidate, job) pair and persists the
/// result onto the candidate. AI failures never surface here; the heuristic
/// fallback guarantees a scoring result.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let (candidate_id, job_id) = match (request.candidate_id, request.job_id) {
        (Some(c), Some(j)) => (c, j),
        _ => {
            return Err(AppError::Validation(
                "candidateId and jobId are required".to_string(),
            ))
        }
    };

    let candidate = state
        .store
        .find_candidate(candidate_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Candidate not found".to_string()))?;

    let job = state
        .store
        .find_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    let profile = CandidateProfile {
        name: candidate.name.clone(),
        skills: candidate.skills.clone(),
        experience_years: candidate.experience_years,
        summary: candidate.summary.clone().unwrap_or_default(),
    };
    let requirements = JobRequirements {
        title: job.title,
        description: job.description,
        required_skills: job.required_skills,
        experience_required: job.experience_required,
    };

    let outcome = score_candidate(state.provider.as_ref(), &profile, &requirements).await;

    let updated = state
        .store
        .update_candidate_score(candidate_id, outcome.result.to_update())
        .await?;

    Ok(Json(ScoreResponse {
        success: true,
        scoring: outcome.result,
        candidate: updated,
    }))
}
