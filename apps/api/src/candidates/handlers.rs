//! Axum route handlers for candidates: résumé upload and listing.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{CandidateRow, NewCandidate};
use crate::resume::fallback::fallback_parse;
use crate::resume::parser::parse_resume;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub candidate: CandidateRow,
    pub message: String,
}

/// POST /api/v1/candidates/upload
///
/// Multipart form: `file` (résumé, read as UTF-8 text; binary PDF parsing
/// is deliberately out of scope), `jobId`, `userId`. The résumé is parsed
/// by the AI provider; on provider failure the regex fallback extracts what
/// it can. The candidate is stored unscored with status `pending`.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut resume_text: Option<String> = None;
    let mut job_id: Option<Uuid> = None;
    let mut user_id: Option<Uuid> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let data = field.bytes().await.map_err(|_| {
                    AppError::Validation(
                        "Failed to read file contents. Please try another file (.txt or text-based)"
                            .to_string(),
                    )
                })?;
                resume_text = Some(String::from_utf8_lossy(&data).into_owned());
            }
            Some("jobId") => {
                let value = field.text().await.unwrap_or_default();
                job_id = value.parse().ok();
            }
            Some("userId") => {
                let value = field.text().await.unwrap_or_default();
                user_id = value.parse().ok();
            }
            _ => {}
        }
    }

    let (resume_text, job_id, user_id) = match (resume_text, job_id, user_id) {
        (Some(text), Some(job_id), Some(user_id)) => (text, job_id, user_id),
        _ => {
            return Err(AppError::Validation(
                "File, jobId, and userId are required".to_string(),
            ))
        }
    };

    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "File appears to be empty or could not be parsed".to_string(),
        ));
    }

    let (parsed, message) = match parse_resume(state.provider.as_ref(), &resume_text).await {
        Ok(parsed) => (parsed, "Resume parsed successfully using AI"),
        Err(e) => {
            warn!("AI resume parsing failed, using fallback: {e}");
            (
                fallback_parse(&resume_text),
                "Resume parsed with basic extraction (AI unavailable)",
            )
        }
    };

    let candidate = state
        .store
        .create_candidate(NewCandidate {
            user_id,
            job_id: Some(job_id),
            name: parsed.name,
            email: Some(parsed.email).filter(|s| !s.is_empty()),
            phone: Some(parsed.phone).filter(|s| !s.is_empty()),
            resume_text,
            skills: parsed.skills,
            experience_years: parsed.experience,
            education: Some(parsed.education).filter(|s| !s.is_empty()),
            summary: Some(parsed.summary).filter(|s| !s.is_empty()),
        })
        .await?;

    Ok(Json(UploadResponse {
        success: true,
        candidate,
        message: message.to_string(),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateListQuery {
    pub user_id: Uuid,
    pub job_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub success: bool,
    pub candidates: Vec<CandidateRow>,
}

/// GET /api/v1/candidates?userId=&jobId=
///
/// Candidates for a user, optionally narrowed to one job, best match first.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Query(params): Query<CandidateListQuery>,
) -> Result<Json<CandidateListResponse>, AppError> {
    let candidates = state
        .store
        .list_candidates(params.user_id, params.job_id)
        .await?;
    Ok(Json(CandidateListResponse {
        success: true,
        candidates,
    }))
}
