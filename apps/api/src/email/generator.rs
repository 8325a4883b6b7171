//! Email drafting: AI primary path, per-type fallback templates.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::email::prompts::{
    EMAIL_SYSTEM, FOLLOWUP_PROMPT_TEMPLATE, INVITE_PROMPT_TEMPLATE, REJECTION_PROMPT_TEMPLATE,
};
use crate::provider::AiProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailType {
    Invite,
    Rejection,
    Followup,
}

impl Default for EmailType {
    fn default() -> Self {
        EmailType::Invite
    }
}

/// Optional context threaded into the prompt.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailDetails {
    pub interview_date: Option<String>,
    pub interview_time: Option<String>,
    pub interview_location: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailContent {
    pub subject: String,
    pub body: String,
}

/// Drafts an email for the given type. Provider errors fall back to a
/// deterministic template; drafting never fails.
pub async fn generate_email(
    provider: &dyn AiProvider,
    email_type: EmailType,
    candidate_name: &str,
    job_title: &str,
    details: &EmailDetails,
) -> EmailContent {
    let prompt = build_prompt(email_type, candidate_name, job_title, details);

    match provider.generate_json(&prompt, EMAIL_SYSTEM).await {
        Ok(value) => from_value(&value),
        Err(e) => {
            warn!("AI email generation failed, using fallback: {e}");
            fallback_email(email_type, candidate_name, job_title)
        }
    }
}

fn build_prompt(
    email_type: EmailType,
    candidate_name: &str,
    job_title: &str,
    details: &EmailDetails,
) -> String {
    match email_type {
        EmailType::Invite => {
            let mut lines = Vec::new();
            if let Some(date) = &details.interview_date {
                lines.push(format!("Interview Date: {date}"));
            }
            if let Some(time) = &details.interview_time {
                lines.push(format!("Interview Time: {time}"));
            }
            match &details.interview_location {
                Some(location) => lines.push(format!("Location: {location}")),
                None => lines.push("Format: Online/In-Person".to_string()),
            }
            INVITE_PROMPT_TEMPLATE
                .replace("{candidate_name}", candidate_name)
                .replace("{job_title}", job_title)
                .replace("{interview_details}", &lines.join("\n"))
        }
        EmailType::Rejection => {
            let reason = details
                .reason
                .as_ref()
                .map(|r| format!("Reason: {r}"))
                .unwrap_or_default();
            REJECTION_PROMPT_TEMPLATE
                .replace("{candidate_name}", candidate_name)
                .replace("{job_title}", job_title)
                .replace("{reason}", &reason)
        }
        EmailType::Followup => FOLLOWUP_PROMPT_TEMPLATE
            .replace("{candidate_name}", candidate_name)
            .replace("{job_title}", job_title),
    }
}

fn from_value(value: &Value) -> EmailContent {
    EmailContent {
        subject: value
            .get("subject")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("Email from HireGen AI")
            .to_string(),
        body: value
            .get("body")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

/// Deterministic drafts for when the AI path is down.
pub fn fallback_email(email_type: EmailType, candidate_name: &str, job_title: &str) -> EmailContent {
    match email_type {
        EmailType::Invite => EmailContent {
            subject: format!("Interview Invitation - {job_title} Position"),
            body: format!(
                "Dear {candidate_name},\n\nThank you for your interest in the {job_title} \
                position. We would like to invite you to an interview; we will follow up \
                shortly with scheduling details.\n\nBest regards,\nHireGen AI Team"
            ),
        },
        EmailType::Rejection => EmailContent {
            subject: format!("Your Application for {job_title}"),
            body: format!(
                "Dear {candidate_name},\n\nThank you for taking the time to apply for the \
                {job_title} position. After careful consideration we have decided not to \
                move forward with your application at this time.\n\nBest regards,\nHireGen AI Team"
            ),
        },
        EmailType::Followup => EmailContent {
            subject: format!("Following Up - {job_title} Application"),
            body: format!(
                "Dear {candidate_name},\n\nWe wanted to follow up regarding your application \
                for the {job_title} position. Your application is still under review and we \
                will be in touch soon.\n\nBest regards,\nHireGen AI Team"
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;
    use async_trait::async_trait;
    use serde_json::json;

    struct DownProvider;

    #[async_trait]
    impl AiProvider for DownProvider {
        fn name(&self) -> &'static str {
            "down"
        }

        async fn generate_json(&self, _: &str, _: &str) -> Result<Value, ProviderError> {
            Err(ProviderError::Unavailable("no credentials".to_string()))
        }
    }

    #[test]
    fn test_invite_prompt_includes_details() {
        let details = EmailDetails {
            interview_date: Some("2026-09-01".to_string()),
            interview_time: Some("10:00".to_string()),
            interview_location: None,
            reason: None,
        };
        let prompt = build_prompt(EmailType::Invite, "Ada", "Engineer", &details);
        assert!(prompt.contains("Interview Date: 2026-09-01"));
        assert!(prompt.contains("Interview Time: 10:00"));
        assert!(prompt.contains("Format: Online/In-Person"));
    }

    #[test]
    fn test_rejection_prompt_includes_reason_when_present() {
        let details = EmailDetails {
            reason: Some("role filled internally".to_string()),
            ..Default::default()
        };
        let prompt = build_prompt(EmailType::Rejection, "Ada", "Engineer", &details);
        assert!(prompt.contains("Reason: role filled internally"));
    }

    #[tokio::test]
    async fn test_fallback_drafts_per_type() {
        for email_type in [EmailType::Invite, EmailType::Rejection, EmailType::Followup] {
            let content =
                generate_email(&DownProvider, email_type, "Ada", "Engineer", &Default::default())
                    .await;
            assert!(content.subject.contains("Engineer"));
            assert!(content.body.contains("Ada"));
        }
    }

    #[test]
    fn test_blank_ai_subject_takes_default() {
        let content = from_value(&json!({ "subject": " ", "body": "Hello" }));
        assert_eq!(content.subject, "Email from HireGen AI");
        assert_eq!(content.body, "Hello");
    }

    #[test]
    fn test_email_type_deserializes_lowercase() {
        let t: EmailType = serde_json::from_str(r#""rejection""#).unwrap();
        assert_eq!(t, EmailType::Rejection);
    }
}
