pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::candidates::handlers as candidates;
use crate::email::handlers as emails;
use crate::jobs::handlers as jobs;
use crate::questions::handlers as questions;
use crate::scoring::handlers as scoring;
use crate::state::AppState;
use crate::tools::handlers as tools;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs
        .route(
            "/api/v1/jobs",
            post(jobs::handle_create_job).get(jobs::handle_list_jobs),
        )
        // Candidates
        .route("/api/v1/candidates/upload", post(candidates::handle_upload))
        .route("/api/v1/candidates", get(candidates::handle_list_candidates))
        .route("/api/v1/candidates/score", post(scoring::handle_score))
        // Interview questions
        .route(
            "/api/v1/questions/generate",
            post(questions::handle_generate_questions),
        )
        // Outreach emails
        .route(
            "/api/v1/emails",
            get(emails::handle_list_emails),
        )
        .route("/api/v1/emails/send", post(emails::handle_send_email))
        .route("/api/v1/emails/analyze", post(emails::handle_analyze_email))
        // Stateless tools
        .route(
            "/api/v1/tools/resume-analysis",
            post(tools::handle_resume_analysis),
        )
        .route("/api/v1/tools/skill-gap", post(tools::handle_skill_gap))
        .route(
            "/api/v1/tools/email-generate",
            post(tools::handle_email_preview),
        )
        .with_state(state)
}
