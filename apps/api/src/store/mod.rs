//! Persistence gateway: injected repository interface over the record store.
//!
//! Handlers and the scoring pipeline depend on this trait, never on a
//! concrete storage technology. `PgStore` is the production backend;
//! `MemoryStore` backs tests.

use async_trait::async_trait;
use uuid::Uuid;

pub mod memory;
pub mod pg;

use crate::errors::AppError;
use crate::models::candidate::{CandidateRow, NewCandidate, ScoreUpdate};
use crate::models::email_log::{EmailLogRow, NewEmailLog};
use crate::models::job::{JobRow, NewJob};

#[async_trait]
pub trait Store: Send + Sync {
    async fn create_job(&self, new: NewJob) -> Result<JobRow, AppError>;
    async fn find_job(&self, id: Uuid) -> Result<Option<JobRow>, AppError>;
    async fn list_jobs(&self, user_id: Uuid) -> Result<Vec<JobRow>, AppError>;

    async fn create_candidate(&self, new: NewCandidate) -> Result<CandidateRow, AppError>;
    async fn find_candidate(&self, id: Uuid) -> Result<Option<CandidateRow>, AppError>;
    /// Sorted by match score descending, unscored candidates last.
    async fn list_candidates(
        &self,
        user_id: Uuid,
        job_id: Option<Uuid>,
    ) -> Result<Vec<CandidateRow>, AppError>;
    /// Applies a scoring result as a single-row write. Returns the updated
    /// row, or `None` when the candidate no longer exists.
    async fn update_candidate_score(
        &self,
        id: Uuid,
        update: ScoreUpdate,
    ) -> Result<Option<CandidateRow>, AppError>;

    async fn insert_email_log(&self, new: NewEmailLog) -> Result<EmailLogRow, AppError>;
    async fn list_email_logs(&self, user_id: Uuid) -> Result<Vec<EmailLogRow>, AppError>;
}
