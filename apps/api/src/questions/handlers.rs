//! Axum route handler for interview question generation.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::questions::generator::{generate_questions, InterviewQuestions, QuestionInput};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    pub job_title: Option<String>,
    #[serde(default)]
    pub job_description: String,
    pub candidate_name: Option<String>,
    pub candidate_skills: Option<Vec<String>>,
    #[serde(default)]
    pub candidate_experience: i32,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsResponse {
    pub success: bool,
    pub questions: InterviewQuestions,
    pub generated_at: DateTime<Utc>,
}

/// POST /api/v1/questions/generate
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let (job_title, candidate_skills) = match (request.job_title, request.candidate_skills) {
        (Some(title), Some(skills)) if !title.trim().is_empty() => (title, skills),
        _ => {
            return Err(AppError::Validation(
                "Job title and candidate skills are required".to_string(),
            ))
        }
    };

    let input = QuestionInput {
        job_title,
        job_description: request.job_description,
        candidate_name: request.candidate_name.unwrap_or_else(|| "Candidate".to_string()),
        candidate_skills,
        candidate_experience: request.candidate_experience,
        missing_skills: request.missing_skills,
    };

    let questions = generate_questions(state.provider.as_ref(), &input).await;

    Ok(Json(GenerateQuestionsResponse {
        success: true,
        questions,
        generated_at: Utc::now(),
    }))
}
