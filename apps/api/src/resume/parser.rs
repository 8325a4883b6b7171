//! AI-backed résumé extraction with field-level defaults.

use serde::Serialize;
use serde_json::Value;

use crate::provider::{AiProvider, ProviderError};
use crate::resume::prompts::{RESUME_PARSE_PROMPT_TEMPLATE, RESUME_PARSE_SYSTEM};

/// Structured fields extracted from raw résumé text. Every field has a
/// defined default so a sparse model response still yields a usable record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience: i32,
    pub education: String,
    pub summary: String,
}

impl ParsedResume {
    /// Builds a record from loose model output: missing arrays become empty,
    /// missing numbers 0, missing strings empty, a missing name "Unknown".
    pub fn from_value(value: &Value) -> Self {
        ParsedResume {
            name: non_empty_str(value.get("name")).unwrap_or("Unknown").to_string(),
            email: str_or_default(value.get("email")),
            phone: str_or_default(value.get("phone")),
            skills: value
                .get("skills")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            experience: value
                .get("experience")
                .and_then(Value::as_f64)
                .unwrap_or(0.0)
                .max(0.0)
                .round() as i32,
            education: str_or_default(value.get("education")),
            summary: str_or_default(value.get("summary")),
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn str_or_default(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or_default().to_string()
}

/// Parses résumé text via the AI provider. Callers decide the failure
/// policy; the upload flow and tools substitute `fallback::fallback_parse`.
pub async fn parse_resume(
    provider: &dyn AiProvider,
    resume_text: &str,
) -> Result<ParsedResume, ProviderError> {
    let prompt = RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    let value = provider.generate_json(&prompt, RESUME_PARSE_SYSTEM).await?;
    Ok(ParsedResume::from_value(&value))
}
