//! PostgreSQL-backed store. Schema lives in `migrations/0001_init.sql`.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{CandidateRow, NewCandidate, ScoreUpdate, STATUS_PENDING};
use crate::models::email_log::{EmailLogRow, NewEmailLog};
use crate::models::job::{JobRow, NewJob};
use crate::store::Store;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_job(&self, new: NewJob) -> Result<JobRow, AppError> {
        let job = sqlx::query_as::<_, JobRow>(
            r#"
            INSERT INTO jobs (id, user_id, title, description, required_skills, experience_required, status)
            VALUES ($1, $2, $3, $4, $5, $6, 'active')
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.user_id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.required_skills)
        .bind(new.experience_required)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    async fn find_job(&self, id: Uuid) -> Result<Option<JobRow>, AppError> {
        let job = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(job)
    }

    async fn list_jobs(&self, user_id: Uuid) -> Result<Vec<JobRow>, AppError> {
        let jobs = sqlx::query_as::<_, JobRow>(
            "SELECT * FROM jobs WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }

    async fn create_candidate(&self, new: NewCandidate) -> Result<CandidateRow, AppError> {
        let candidate = sqlx::query_as::<_, CandidateRow>(
            r#"
            INSERT INTO candidates
                (id, user_id, job_id, name, email, phone, resume_text, skills,
                 experience_years, education, summary, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.user_id)
        .bind(new.job_id)
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.resume_text)
        .bind(&new.skills)
        .bind(new.experience_years)
        .bind(&new.education)
        .bind(&new.summary)
        .bind(STATUS_PENDING)
        .fetch_one(&self.pool)
        .await?;

        Ok(candidate)
    }

    async fn find_candidate(&self, id: Uuid) -> Result<Option<CandidateRow>, AppError> {
        let candidate = sqlx::query_as::<_, CandidateRow>("SELECT * FROM candidates WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(candidate)
    }

    async fn list_candidates(
        &self,
        user_id: Uuid,
        job_id: Option<Uuid>,
    ) -> Result<Vec<CandidateRow>, AppError> {
        let candidates = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT * FROM candidates
            WHERE user_id = $1 AND ($2::uuid IS NULL OR job_id = $2)
            ORDER BY match_score DESC NULLS LAST, created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(candidates)
    }

    async fn update_candidate_score(
        &self,
        id: Uuid,
        update: ScoreUpdate,
    ) -> Result<Option<CandidateRow>, AppError> {
        // Single-statement write: the row lock serializes concurrent score
        // writes for the same candidate; last writer wins.
        let candidate = sqlx::query_as::<_, CandidateRow>(
            r#"
            UPDATE candidates
            SET match_score = $2,
                strength_areas = $3,
                missing_skills = $4,
                status = $5,
                ai_reasoning = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(update.match_score)
        .bind(&update.strength_areas)
        .bind(&update.missing_skills)
        .bind(&update.status)
        .bind(&update.reasoning)
        .fetch_optional(&self.pool)
        .await?;

        Ok(candidate)
    }

    async fn insert_email_log(&self, new: NewEmailLog) -> Result<EmailLogRow, AppError> {
        let log = sqlx::query_as::<_, EmailLogRow>(
            r#"
            INSERT INTO email_logs
                (id, user_id, candidate_id, job_id, to_email, subject, body, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.user_id)
        .bind(new.candidate_id)
        .bind(new.job_id)
        .bind(&new.to_email)
        .bind(&new.subject)
        .bind(&new.body)
        .bind(&new.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(log)
    }

    async fn list_email_logs(&self, user_id: Uuid) -> Result<Vec<EmailLogRow>, AppError> {
        let logs = sqlx::query_as::<_, EmailLogRow>(
            "SELECT * FROM email_logs WHERE user_id = $1 ORDER BY sent_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(logs)
    }
}
