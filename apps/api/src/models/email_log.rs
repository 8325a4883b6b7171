use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EmailLogRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub candidate_id: Option<Uuid>,
    pub job_id: Option<Uuid>,
    pub to_email: String,
    pub subject: String,
    pub body: String,
    /// "sent" | "failed", recording the actual delivery outcome.
    pub status: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewEmailLog {
    pub user_id: Uuid,
    pub candidate_id: Option<Uuid>,
    pub job_id: Option<Uuid>,
    pub to_email: String,
    pub subject: String,
    pub body: String,
    pub status: String,
}
