//! Axum route handlers for the stateless tools.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::email::generator::{generate_email, EmailContent, EmailDetails, EmailType};
use crate::errors::AppError;
use crate::models::job::SkillInput;
use crate::resume::fallback::fallback_parse;
use crate::resume::parser::{parse_resume, ParsedResume};
use crate::scoring::pipeline::{score_candidate, CandidateProfile, JobRequirements};
use crate::scoring::{Recommendation, ScoringResult};
use crate::state::AppState;

// ── Resume analysis ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResumeAnalysisRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResumeAnalysisResponse {
    pub success: bool,
    pub parsed: ParsedResume,
}

/// POST /api/v1/tools/resume-analysis
pub async fn handle_resume_analysis(
    State(state): State<AppState>,
    Json(request): Json<ResumeAnalysisRequest>,
) -> Result<Json<ResumeAnalysisResponse>, AppError> {
    let text = request
        .text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Resume text is required".to_string()))?;

    let parsed = match parse_resume(state.provider.as_ref(), &text).await {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("AI resume analysis failed, using fallback: {e}");
            fallback_parse(&text)
        }
    };

    Ok(Json(ResumeAnalysisResponse {
        success: true,
        parsed,
    }))
}

// ── Skill gap ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapRequest {
    pub required_skills: Option<SkillInput>,
    pub candidate_skills: Option<SkillInput>,
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapResponse {
    pub success: bool,
    #[serde(flatten)]
    pub scoring: ScoringResult,
}

/// POST /api/v1/tools/skill-gap
///
/// Compares required skills against candidate skills (given directly or
/// extracted from résumé text) using the scoring pipeline with a synthetic
/// job. Empty candidate skills short-circuit to a zero score.
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Json(request): Json<SkillGapRequest>,
) -> Result<Json<SkillGapResponse>, AppError> {
    let required_skills = request
        .required_skills
        .map(SkillInput::into_vec)
        .filter(|skills| !skills.is_empty())
        .ok_or_else(|| AppError::Validation("Required skills are required".to_string()))?;

    let mut candidate_skills = request
        .candidate_skills
        .map(SkillInput::into_vec)
        .unwrap_or_default();
    let mut candidate_name = "Candidate".to_string();
    let mut candidate_experience = 0;
    let mut candidate_summary = String::new();

    if candidate_skills.is_empty() && !request.resume_text.trim().is_empty() {
        let parsed = match parse_resume(state.provider.as_ref(), &request.resume_text).await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("AI resume parsing failed in skill-gap, using fallback: {e}");
                fallback_parse(&request.resume_text)
            }
        };
        candidate_name = parsed.name;
        candidate_experience = parsed.experience;
        candidate_summary = parsed.summary;
        candidate_skills = parsed.skills;
    }

    if candidate_skills.is_empty() {
        // Nothing to compare: every required skill is missing.
        let scoring = ScoringResult {
            match_score: 0,
            strength_areas: Vec::new(),
            missing_skills: required_skills,
            recommendation: Recommendation::Review,
            reasoning: "Candidate skills not provided".to_string(),
        };
        return Ok(Json(SkillGapResponse {
            success: true,
            scoring,
        }));
    }

    let profile = CandidateProfile {
        name: candidate_name,
        skills: candidate_skills,
        experience_years: candidate_experience,
        summary: candidate_summary,
    };
    let requirements = JobRequirements {
        title: "Skill Gap Check".to_string(),
        description: "Compare required skills with candidate skills.".to_string(),
        required_skills,
        experience_required: 0,
    };

    let outcome = score_candidate(state.provider.as_ref(), &profile, &requirements).await;

    Ok(Json(SkillGapResponse {
        success: true,
        scoring: outcome.result,
    }))
}

// ── Email preview ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailPreviewRequest {
    pub email_type: Option<EmailType>,
    pub candidate_name: Option<String>,
    pub job_title: Option<String>,
    #[serde(default)]
    pub details: EmailDetails,
}

#[derive(Debug, Serialize)]
pub struct EmailPreviewResponse {
    pub success: bool,
    pub email: EmailContent,
}

/// POST /api/v1/tools/email-generate
///
/// Drafts an email without sending or logging it.
pub async fn handle_email_preview(
    State(state): State<AppState>,
    Json(request): Json<EmailPreviewRequest>,
) -> Result<Json<EmailPreviewResponse>, AppError> {
    let (email_type, candidate_name, job_title) = match (
        request.email_type,
        request.candidate_name,
        request.job_title,
    ) {
        (Some(t), Some(name), Some(title)) => (t, name, title),
        _ => {
            return Err(AppError::Validation(
                "emailType, candidateName and jobTitle are required".to_string(),
            ))
        }
    };

    let email = generate_email(
        state.provider.as_ref(),
        email_type,
        &candidate_name,
        &job_title,
        &request.details,
    )
    .await;

    Ok(Json(EmailPreviewResponse {
        success: true,
        email,
    }))
}

// ── Tests ───────────────────────────────────────────────────────────────────
