//! Gemini (Google Generative Language API) backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::provider::repair::coerce_json;
use crate::provider::{AiProvider, ProviderError};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    system_instruction: GeminiContent<'a>,
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

pub struct GeminiProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiProvider {
    pub fn new(client: Client, api_key: Option<String>, model: String) -> Self {
        Self {
            client,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate_json(&self, prompt: &str, system: &str) -> Result<Value, ProviderError> {
        let key = self.api_key.as_deref().ok_or_else(|| {
            ProviderError::Unavailable(
                "Missing GEMINI_API_KEY / GOOGLE_API_KEY".to_string(),
            )
        })?;

        let request_body = GeminiRequest {
            system_instruction: GeminiContent {
                parts: vec![GeminiPart { text: system }],
            },
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let url = format!("{GEMINI_API_BASE}/{}:generateContent", self.model);
        let response = self
            .client
            .post(&url)
            .query(&[("key", key)])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GeminiResponse = response.json().await?;
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| {
                ProviderError::Malformed("Gemini response contained no text part".to_string())
            })?;

        debug!("Gemini generation returned {} chars", text.len());
        coerce_json(&text)
    }
}
