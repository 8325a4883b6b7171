//! Reply analysis: sentiment, urgency, tone and a short summary.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::email::prompts::{SENTIMENT_PROMPT_TEMPLATE, SENTIMENT_SYSTEM};
use crate::provider::AiProvider;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAnalysis {
    pub sentiment: String,
    pub urgency: String,
    pub tone: String,
    pub summary: String,
    pub action_required: bool,
}

impl EmailAnalysis {
    /// Neutral defaults, used both for sparse model output and as the
    /// full fallback when the provider is down.
    fn neutral() -> Self {
        EmailAnalysis {
            sentiment: "neutral".to_string(),
            urgency: "medium".to_string(),
            tone: "professional".to_string(),
            summary: String::new(),
            action_required: false,
        }
    }
}

/// Analyzes an inbound email reply. Provider errors degrade to neutral
/// defaults with a fixed summary.
pub async fn analyze_email(provider: &dyn AiProvider, email_text: &str) -> EmailAnalysis {
    let prompt = SENTIMENT_PROMPT_TEMPLATE.replace("{email_text}", email_text);

    match provider.generate_json(&prompt, SENTIMENT_SYSTEM).await {
        Ok(value) => from_value(&value),
        Err(e) => {
            warn!("AI sentiment analysis failed, using fallback: {e}");
            EmailAnalysis {
                summary: "Email received".to_string(),
                ..EmailAnalysis::neutral()
            }
        }
    }
}

fn from_value(value: &Value) -> EmailAnalysis {
    let neutral = EmailAnalysis::neutral();
    EmailAnalysis {
        sentiment: str_or(value.get("sentiment"), &neutral.sentiment),
        urgency: str_or(value.get("urgency"), &neutral.urgency),
        tone: str_or(value.get("tone"), &neutral.tone),
        summary: str_or(value.get("summary"), ""),
        action_required: value
            .get("actionRequired")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    }
}

fn str_or(value: Option<&Value>, default: &str) -> String {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default)
        .to_string()
}
