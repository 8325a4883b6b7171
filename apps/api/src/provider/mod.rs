//! AI provider adapter: the single point of entry for all generative-model
//! calls in HireGen.
//!
//! ARCHITECTURAL RULE: No other module may call an AI backend directly.
//! All model interactions MUST go through the `AiProvider` trait.
//!
//! Three interchangeable backends: Hugging Face Inference (keyless-friendly
//! hosted inference), Gemini (hosted generative model) and OpenAI chat
//! completions with JSON-forced output as the default.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

pub mod gemini;
pub mod hf;
pub mod openai;
pub mod repair;

use crate::config::Config;

/// Timeout applied to every outbound provider call. This is the only
/// deadline in the pipeline; requests otherwise wait for the backend.
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed model response: {0}")]
    Malformed(String),
}

/// Uniform interface over the generative backends: given a task prompt and a
/// system instruction, return parsed JSON. Stateless across calls; the only
/// side effect is the outbound network request.
#[async_trait]
pub trait AiProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate_json(&self, prompt: &str, system: &str) -> Result<Value, ProviderError>;
}

/// The provider selected by configuration resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    HuggingFace,
    Gemini,
    OpenAi,
}

impl ProviderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::HuggingFace => "hf",
            ProviderKind::Gemini => "gemini",
            ProviderKind::OpenAi => "openai",
        }
    }
}

/// Pure configuration-resolution function: an explicit `AI_PROVIDER` name
/// wins; otherwise probe in fixed priority order (Hugging Face, then
/// Gemini), falling back to OpenAI as the default.
pub fn resolve_provider_kind(config: &Config) -> ProviderKind {
    match config.ai_provider.as_deref().map(str::to_lowercase).as_deref() {
        Some("hf") => return ProviderKind::HuggingFace,
        Some("gemini") => return ProviderKind::Gemini,
        Some("openai") => return ProviderKind::OpenAi,
        _ => {}
    }

    if config.hf_api_key.is_some() {
        ProviderKind::HuggingFace
    } else if config.gemini_api_key.is_some() {
        ProviderKind::Gemini
    } else {
        ProviderKind::OpenAi
    }
}

/// Builds the configured provider. Missing credentials are not an error
/// here: the backend reports `ProviderError::Unavailable` at call time and
/// the scoring/parsing fallbacks take over.
pub fn build_provider(config: &Config) -> Arc<dyn AiProvider> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to build HTTP client");

    match resolve_provider_kind(config) {
        ProviderKind::HuggingFace => Arc::new(hf::HfProvider::new(
            client,
            config.hf_api_key.clone(),
            config.hf_model.clone(),
        )),
        ProviderKind::Gemini => Arc::new(gemini::GeminiProvider::new(
            client,
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
        )),
        ProviderKind::OpenAi => Arc::new(openai::OpenAiProvider::new(
            client,
            config.openai_api_key.clone(),
            config.openai_model.clone(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            database_url: "postgres://localhost/test".to_string(),
            db_max_connections: 10,
            ai_provider: None,
            hf_api_key: None,
            hf_model: "google/flan-t5-large".to_string(),
            gemini_api_key: None,
            gemini_model: "gemini-1.5-flash".to_string(),
            openai_api_key: None,
            openai_model: "gpt-4o-mini".to_string(),
            smtp_host: None,
            smtp_port: 587,
            smtp_user: String::new(),
            smtp_pass: String::new(),
            email_from: "noreply@hiregen.ai".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_explicit_provider_name_wins() {
        let mut config = base_config();
        config.ai_provider = Some("gemini".to_string());
        config.hf_api_key = Some("hf_token".to_string());
        assert_eq!(resolve_provider_kind(&config), ProviderKind::Gemini);
    }

    #[test]
    fn test_explicit_name_is_case_insensitive() {
        let mut config = base_config();
        config.ai_provider = Some("OpenAI".to_string());
        assert_eq!(resolve_provider_kind(&config), ProviderKind::OpenAi);
    }

    #[test]
    fn test_probe_prefers_hf_over_gemini() {
        let mut config = base_config();
        config.hf_api_key = Some("hf_token".to_string());
        config.gemini_api_key = Some("gem_key".to_string());
        assert_eq!(resolve_provider_kind(&config), ProviderKind::HuggingFace);
    }

    #[test]
    fn test_probe_falls_through_to_gemini() {
        let mut config = base_config();
        config.gemini_api_key = Some("gem_key".to_string());
        assert_eq!(resolve_provider_kind(&config), ProviderKind::Gemini);
    }

    #[test]
    fn test_openai_is_the_default() {
        assert_eq!(resolve_provider_kind(&base_config()), ProviderKind::OpenAi);
    }

    #[test]
    fn test_unknown_explicit_name_falls_back_to_probe() {
        let mut config = base_config();
        config.ai_provider = Some("llama".to_string());
        config.hf_api_key = Some("hf_token".to_string());
        assert_eq!(resolve_provider_kind(&config), ProviderKind::HuggingFace);
    }
}
