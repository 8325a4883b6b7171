//! Hugging Face Inference API backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::provider::repair::coerce_json;
use crate::provider::{AiProvider, ProviderError};

const HF_API_BASE: &str = "https://api-inference.huggingface.co/models";
const MAX_NEW_TOKENS: u32 = 700;
const TEMPERATURE: f32 = 0.4;

#[derive(Debug, Serialize)]
struct HfRequest<'a> {
    inputs: &'a str,
    parameters: HfParameters,
}

#[derive(Debug, Serialize)]
struct HfParameters {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

/// Text-generation endpoints return either an array of generations or a
/// single object; error bodies carry an `error` string instead. Untagged
/// variants are tried in order, and `HfGeneration` matches any object (its
/// only field is optional), so `Error` must come before `One`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HfResponse {
    Error { error: String },
    Many(Vec<HfGeneration>),
    One(HfGeneration),
}

#[derive(Debug, Deserialize)]
struct HfGeneration {
    generated_text: Option<String>,
}

pub struct HfProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl HfProvider {
    pub fn new(client: Client, api_key: Option<String>, model: String) -> Self {
        Self {
            client,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl AiProvider for HfProvider {
    fn name(&self) -> &'static str {
        "hf"
    }

    async fn generate_json(&self, prompt: &str, system: &str) -> Result<Value, ProviderError> {
        let token = self.api_key.as_deref().ok_or_else(|| {
            ProviderError::Unavailable("Missing Hugging Face API token (HF_API_KEY)".to_string())
        })?;

        // The inference API has no system-role slot; prepend the instruction.
        let combined = format!("{system}\n\n{prompt}");
        let request_body = HfRequest {
            inputs: &combined,
            parameters: HfParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                return_full_text: false,
            },
        };

        let url = format!("{HF_API_BASE}/{}", self.model);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body: HfResponse = response.json().await?;

        let text = match body {
            HfResponse::Error { error } => {
                return Err(ProviderError::Api {
                    status: status.as_u16(),
                    message: error,
                });
            }
            _ if !status.is_success() => {
                return Err(ProviderError::Api {
                    status: status.as_u16(),
                    message: format!("HF request failed ({status})"),
                });
            }
            HfResponse::Many(generations) => generations
                .into_iter()
                .next()
                .and_then(|g| g.generated_text)
                .unwrap_or_default(),
            HfResponse::One(generation) => generation.generated_text.unwrap_or_default(),
        };

        debug!("HF generation returned {} chars", text.len());
        coerce_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_maps_to_error_variant() {
        let body: HfResponse =
            serde_json::from_str(r#"{"error": "Model google/flan-t5-large is overloaded"}"#)
                .unwrap();
        assert!(
            matches!(body, HfResponse::Error { ref error } if error.contains("overloaded")),
            "error bodies must not be swallowed by the generation variants"
        );
    }

    #[test]
    fn test_generation_array_maps_to_many() {
        let body: HfResponse =
            serde_json::from_str(r#"[{"generated_text": "{\"matchScore\": 80}"}]"#).unwrap();
        assert!(matches!(body, HfResponse::Many(ref g) if g.len() == 1));
    }

    #[test]
    fn test_single_generation_maps_to_one() {
        let body: HfResponse =
            serde_json::from_str(r#"{"generated_text": "{\"matchScore\": 80}"}"#).unwrap();
        assert!(matches!(body, HfResponse::One(_)));
    }
}
