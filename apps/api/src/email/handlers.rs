//! Axum route handlers for outreach emails.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::email::generator::{generate_email, EmailDetails, EmailType};
use crate::email::sender::DeliveryStatus;
use crate::email::sentiment::{analyze_email, EmailAnalysis};
use crate::errors::AppError;
use crate::models::email_log::{EmailLogRow, NewEmailLog};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    pub candidate_email: Option<String>,
    pub candidate_name: Option<String>,
    pub job_title: Option<String>,
    pub user_id: Option<Uuid>,
    pub candidate_id: Option<Uuid>,
    pub job_id: Option<Uuid>,
    #[serde(default)]
    pub email_type: EmailType,
    #[serde(flatten)]
    pub details: EmailDetails,
}

#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub success: bool,
    pub email: EmailLogRow,
    pub message: String,
}

/// POST /api/v1/emails/send
///
/// Drafts (AI with fallback), attempts SMTP delivery, and logs the outcome.
/// Delivery failure is recorded on the log, not surfaced as an error.
pub async fn handle_send_email(
    State(state): State<AppState>,
    Json(request): Json<SendEmailRequest>,
) -> Result<Json<SendEmailResponse>, AppError> {
    let (candidate_email, candidate_name, job_title, user_id) = match (
        request.candidate_email,
        request.candidate_name,
        request.job_title,
        request.user_id,
    ) {
        (Some(email), Some(name), Some(title), Some(user_id)) => (email, name, title, user_id),
        _ => {
            return Err(AppError::Validation(
                "Candidate email, name, job title and userId are required".to_string(),
            ))
        }
    };

    let content = generate_email(
        state.provider.as_ref(),
        request.email_type,
        &candidate_name,
        &job_title,
        &request.details,
    )
    .await;

    let status = state
        .mailer
        .send(&candidate_email, &content.subject, &content.body)
        .await;

    let log = state
        .store
        .insert_email_log(NewEmailLog {
            user_id,
            candidate_id: request.candidate_id,
            job_id: request.job_id,
            to_email: candidate_email,
            subject: content.subject,
            body: content.body,
            status: status.as_str().to_string(),
        })
        .await?;

    let message = match status {
        DeliveryStatus::Sent => "Email sent successfully".to_string(),
        DeliveryStatus::Failed => {
            "Email generated but not sent (check SMTP configuration)".to_string()
        }
    };

    Ok(Json(SendEmailResponse {
        success: true,
        email: log,
        message,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailLogQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct EmailLogListResponse {
    pub success: bool,
    pub emails: Vec<EmailLogRow>,
}

/// GET /api/v1/emails?userId=
pub async fn handle_list_emails(
    State(state): State<AppState>,
    Query(params): Query<EmailLogQuery>,
) -> Result<Json<EmailLogListResponse>, AppError> {
    let emails = state.store.list_email_logs(params.user_id).await?;
    Ok(Json(EmailLogListResponse {
        success: true,
        emails,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeEmailRequest {
    pub email_text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeEmailResponse {
    pub success: bool,
    pub analysis: EmailAnalysis,
    pub analyzed_at: DateTime<Utc>,
}

/// POST /api/v1/emails/analyze
pub async fn handle_analyze_email(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeEmailRequest>,
) -> Result<Json<AnalyzeEmailResponse>, AppError> {
    let email_text = request
        .email_text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Email text is required".to_string()))?;

    let analysis = analyze_email(state.provider.as_ref(), &email_text).await;

    Ok(Json(AnalyzeEmailResponse {
        success: true,
        analysis,
        analyzed_at: Utc::now(),
    }))
}
