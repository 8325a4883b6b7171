//! OpenAI chat-completion backend with JSON-forced responses.
//!
//! The default backend when neither Hugging Face nor Gemini is configured.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::provider::repair::coerce_json;
use crate::provider::{AiProvider, ProviderError};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const TEMPERATURE: f32 = 0.4;

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    temperature: f32,
    response_format: Value,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

pub struct OpenAiProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl OpenAiProvider {
    pub fn new(client: Client, api_key: Option<String>, model: String) -> Self {
        Self {
            client,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl AiProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn generate_json(&self, prompt: &str, system: &str) -> Result<Value, ProviderError> {
        let key = self.api_key.as_deref().ok_or_else(|| {
            ProviderError::Unavailable(
                "OPENAI_API_KEY is missing and AI_PROVIDER is not set to hf or gemini".to_string(),
            )
        })?;

        let request_body = OpenAiRequest {
            model: &self.model,
            messages: vec![
                OpenAiMessage {
                    role: "system",
                    content: system,
                },
                OpenAiMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            response_format: json!({ "type": "json_object" }),
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: OpenAiResponse = response.json().await?;
        let text = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                ProviderError::Malformed("OpenAI response contained no content".to_string())
            })?;

        debug!("OpenAI completion returned {} chars", text.len());
        coerce_json(&text)
    }
}
