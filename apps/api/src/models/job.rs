use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    /// Never empty; enforced at creation.
    pub required_skills: Vec<String>,
    pub experience_required: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewJob {
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub experience_required: i32,
}

/// Skill lists arrive either as a JSON array or as a comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillInput {
    List(Vec<String>),
    Csv(String),
}

impl SkillInput {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            SkillInput::List(skills) => skills
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            SkillInput::Csv(csv) => csv
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}
