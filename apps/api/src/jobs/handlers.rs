//! Axum route handlers for job postings.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobRow, NewJob, SkillInput};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub required_skills: Option<SkillInput>,
    #[serde(default)]
    pub experience_required: i32,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct CreateJobResponse {
    pub success: bool,
    pub job: JobRow,
}

/// POST /api/v1/jobs
///
/// Creates a job posting. The required-skill set must be non-empty; skills
/// are accepted as an array or a comma-separated string.
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<CreateJobResponse>), AppError> {
    let (title, description, skills, user_id) = match (
        request.title,
        request.description,
        request.required_skills,
        request.user_id,
    ) {
        (Some(title), Some(description), Some(skills), Some(user_id))
            if !title.trim().is_empty() && !description.trim().is_empty() =>
        {
            (title, description, skills, user_id)
        }
        _ => return Err(AppError::Validation("All fields are required".to_string())),
    };

    let required_skills = skills.into_vec();
    if required_skills.is_empty() {
        return Err(AppError::Validation(
            "At least one required skill is needed".to_string(),
        ));
    }

    let job = state
        .store
        .create_job(NewJob {
            user_id,
            title,
            description,
            required_skills,
            experience_required: request.experience_required.max(0),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateJobResponse { success: true, job }),
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub success: bool,
    pub jobs: Vec<JobRow>,
}

/// GET /api/v1/jobs?userId=
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobListQuery>,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs = state.store.list_jobs(params.user_id).await?;
    Ok(Json(JobListResponse {
        success: true,
        jobs,
    }))
}
