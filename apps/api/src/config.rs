use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Only `DATABASE_URL` is strictly required. AI provider credentials are all
/// optional: which ones are present decides the active provider (see
/// `provider::resolve_provider_kind`). SMTP settings are optional; without
/// them outbound emails are logged as failed instead of delivered.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,

    /// Explicit provider selection: "hf" | "gemini" | "openai". When unset,
    /// the first backend with credentials wins (HF, then Gemini, then OpenAI).
    pub ai_provider: Option<String>,
    pub hf_api_key: Option<String>,
    pub hf_model: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,

    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub email_from: String,

    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,

            ai_provider: optional_env("AI_PROVIDER"),
            hf_api_key: optional_env("HF_API_KEY"),
            hf_model: std::env::var("HF_TEXT_MODEL")
                .unwrap_or_else(|_| "google/flan-t5-large".to_string()),
            gemini_api_key: optional_env("GEMINI_API_KEY")
                .or_else(|| optional_env("GOOGLE_API_KEY")),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),

            smtp_host: optional_env("SMTP_HOST"),
            smtp_port: std::env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse::<u16>()
                .context("SMTP_PORT must be a valid port number")?,
            smtp_user: std::env::var("SMTP_USER").unwrap_or_default(),
            smtp_pass: std::env::var("SMTP_PASS").unwrap_or_default(),
            email_from: std::env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "noreply@hiregen.ai".to_string()),

            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Treats unset and empty variables the same; blank keys never select a provider.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test that touches process env vars; keeps them to itself.
    #[test]
    fn test_db_pool_size_defaults_and_overrides() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/hiregen_test");

        std::env::remove_var("DATABASE_MAX_CONNECTIONS");
        let config = Config::from_env().unwrap();
        assert_eq!(config.db_max_connections, 10);

        std::env::set_var("DATABASE_MAX_CONNECTIONS", "25");
        let config = Config::from_env().unwrap();
        assert_eq!(config.db_max_connections, 25);

        std::env::set_var("DATABASE_MAX_CONNECTIONS", "not-a-number");
        assert!(Config::from_env().is_err());

        std::env::remove_var("DATABASE_MAX_CONNECTIONS");
    }
}
