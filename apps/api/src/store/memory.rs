//! In-memory store used by tests. Mirrors the `Store` contract exactly,
//! including list ordering and the weak candidate→job reference.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{CandidateRow, NewCandidate, ScoreUpdate, STATUS_PENDING};
use crate::models::email_log::{EmailLogRow, NewEmailLog};
use crate::models::job::{JobRow, NewJob};
use crate::store::Store;

#[derive(Default)]
pub struct MemoryStore {
    jobs: Mutex<Vec<JobRow>>,
    candidates: Mutex<Vec<CandidateRow>>,
    email_logs: Mutex<Vec<EmailLogRow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_job(&self, new: NewJob) -> Result<JobRow, AppError> {
        let job = JobRow {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            title: new.title,
            description: new.description,
            required_skills: new.required_skills,
            experience_required: new.experience_required,
            status: "active".to_string(),
            created_at: Utc::now(),
        };
        self.jobs.lock().unwrap().push(job.clone());
        Ok(job)
    }

    async fn find_job(&self, id: Uuid) -> Result<Option<JobRow>, AppError> {
        Ok(self.jobs.lock().unwrap().iter().find(|j| j.id == id).cloned())
    }

    async fn list_jobs(&self, user_id: Uuid) -> Result<Vec<JobRow>, AppError> {
        let mut jobs: Vec<JobRow> = self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .filter(|j| j.user_id == user_id)
            .cloned()
            .collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    async fn create_candidate(&self, new: NewCandidate) -> Result<CandidateRow, AppError> {
        let candidate = CandidateRow {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            job_id: new.job_id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            resume_text: Some(new.resume_text),
            skills: new.skills,
            experience_years: new.experience_years,
            education: new.education,
            summary: new.summary,
            match_score: None,
            strength_areas: Vec::new(),
            missing_skills: Vec::new(),
            ai_reasoning: None,
            status: STATUS_PENDING.to_string(),
            created_at: Utc::now(),
        };
        self.candidates.lock().unwrap().push(candidate.clone());
        Ok(candidate)
    }

    async fn find_candidate(&self, id: Uuid) -> Result<Option<CandidateRow>, AppError> {
        Ok(self
            .candidates
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list_candidates(
        &self,
        user_id: Uuid,
        job_id: Option<Uuid>,
    ) -> Result<Vec<CandidateRow>, AppError> {
        let mut candidates: Vec<CandidateRow> = self
            .candidates
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .filter(|c| job_id.is_none() || c.job_id == job_id)
            .cloned()
            .collect();
        // Highest score first, unscored last.
        candidates.sort_by(|a, b| match (a.match_score, b.match_score) {
            (Some(x), Some(y)) => y.cmp(&x).then(b.created_at.cmp(&a.created_at)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => b.created_at.cmp(&a.created_at),
        });
        Ok(candidates)
    }

    async fn update_candidate_score(
        &self,
        id: Uuid,
        update: ScoreUpdate,
    ) -> Result<Option<CandidateRow>, AppError> {
        let mut candidates = self.candidates.lock().unwrap();
        let Some(candidate) = candidates.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        candidate.match_score = Some(update.match_score);
        candidate.strength_areas = update.strength_areas;
        candidate.missing_skills = update.missing_skills;
        candidate.status = update.status;
        candidate.ai_reasoning = Some(update.reasoning);
        Ok(Some(candidate.clone()))
    }

    async fn insert_email_log(&self, new: NewEmailLog) -> Result<EmailLogRow, AppError> {
        let log = EmailLogRow {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            candidate_id: new.candidate_id,
            job_id: new.job_id,
            to_email: new.to_email,
            subject: new.subject,
            body: new.body,
            status: new.status,
            sent_at: Utc::now(),
        };
        self.email_logs.lock().unwrap().push(log.clone());
        Ok(log)
    }

    async fn list_email_logs(&self, user_id: Uuid) -> Result<Vec<EmailLogRow>, AppError> {
        let mut logs: Vec<EmailLogRow> = self
            .email_logs
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect();
        logs.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));
        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::STATUS_REVIEW;
    use crate::scoring::fallback::fallback_score;

    fn new_candidate(user_id: Uuid, skills: &[&str]) -> NewCandidate {
        NewCandidate {
            user_id,
            job_id: None,
            name: "Test Candidate".to_string(),
            email: Some("candidate@example.com".to_string()),
            phone: None,
            resume_text: "resume".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_years: 2,
            education: None,
            summary: None,
        }
    }

    #[tokio::test]
    async fn test_created_candidate_starts_pending_and_unscored() {
        let store = MemoryStore::new();
        let candidate = store
            .create_candidate(new_candidate(Uuid::new_v4(), &["Python"]))
            .await
            .unwrap();
        assert_eq!(candidate.status, STATUS_PENDING);
        assert_eq!(candidate.match_score, None);
        assert!(candidate.strength_areas.is_empty());
    }

    #[tokio::test]
    async fn test_score_update_persists_all_scoring_fields() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        let candidate = store
            .create_candidate(new_candidate(user_id, &["Python", "SQL"]))
            .await
            .unwrap();

        let result = fallback_score(
            &candidate.skills,
            candidate.experience_years,
            &["Python".to_string(), "Django".to_string(), "SQL".to_string()],
            3,
        );
        let updated = store
            .update_candidate_score(candidate.id, result.to_update())
            .await
            .unwrap()
            .expect("candidate exists");

        assert_eq!(updated.match_score, Some(67));
        assert_eq!(updated.strength_areas, vec!["python", "sql"]);
        assert_eq!(updated.missing_skills, vec!["django"]);
        assert_eq!(updated.status, STATUS_REVIEW);
        assert_eq!(updated.ai_reasoning.as_deref(), Some("Basic scoring algorithm"));

        // The stored row reflects the write, not just the returned copy.
        let fetched = store.find_candidate(candidate.id).await.unwrap().unwrap();
        assert_eq!(fetched.match_score, Some(67));
        assert_eq!(fetched.status, STATUS_REVIEW);
    }

    #[tokio::test]
    async fn test_score_update_on_missing_candidate_returns_none() {
        let store = MemoryStore::new();
        let update = ScoreUpdate {
            match_score: 50,
            strength_areas: Vec::new(),
            missing_skills: Vec::new(),
            status: STATUS_REVIEW.to_string(),
            reasoning: String::new(),
        };
        let updated = store
            .update_candidate_score(Uuid::new_v4(), update)
            .await
            .unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_list_candidates_sorts_scored_before_unscored() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();

        let unscored = store
            .create_candidate(new_candidate(user_id, &[]))
            .await
            .unwrap();
        let low = store
            .create_candidate(new_candidate(user_id, &[]))
            .await
            .unwrap();
        let high = store
            .create_candidate(new_candidate(user_id, &[]))
            .await
            .unwrap();

        for (id, score) in [(low.id, 40), (high.id, 90)] {
            let update = ScoreUpdate {
                match_score: score,
                strength_areas: Vec::new(),
                missing_skills: Vec::new(),
                status: STATUS_REVIEW.to_string(),
                reasoning: String::new(),
            };
            store.update_candidate_score(id, update).await.unwrap();
        }

        let listed = store.list_candidates(user_id, None).await.unwrap();
        let ids: Vec<Uuid> = listed.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![high.id, low.id, unscored.id]);
    }

    #[tokio::test]
    async fn test_list_candidates_filters_by_job() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        let job_id = Uuid::new_v4();

        let mut with_job = new_candidate(user_id, &[]);
        with_job.job_id = Some(job_id);
        let attached = store.create_candidate(with_job).await.unwrap();
        store
            .create_candidate(new_candidate(user_id, &[]))
            .await
            .unwrap();

        let listed = store.list_candidates(user_id, Some(job_id)).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, attached.id);
    }

    #[tokio::test]
    async fn test_email_logs_are_scoped_to_user() {
        let store = MemoryStore::new();
        let user_a = Uuid::new_v4();
        let user_b = Uuid::new_v4();

        for user_id in [user_a, user_a, user_b] {
            store
                .insert_email_log(NewEmailLog {
                    user_id,
                    candidate_id: None,
                    job_id: None,
                    to_email: "candidate@example.com".to_string(),
                    subject: "Interview Invitation".to_string(),
                    body: "Hello".to_string(),
                    status: "sent".to_string(),
                })
                .await
                .unwrap();
        }

        assert_eq!(store.list_email_logs(user_a).await.unwrap().len(), 2);
        assert_eq!(store.list_email_logs(user_b).await.unwrap().len(), 1);
    }
}
