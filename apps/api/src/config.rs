use anyhow::{bail, Context, Result};

use crate::llm_client::LlmProvider;

/// Application configuration loaded from environment variables.
/// Only the AI provider name is validated strictly; every external
/// collaborator is optional so the service still answers from its fallbacks.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub ai_provider: LlmProvider,
    pub ai_api_key: Option<String>,
    pub ai_model: String,
    pub ai_base_url: String,
    pub database_url: Option<String>,
    pub redis_url: Option<String>,
    /// Program plus leading arguments; the résumé path is appended last.
    pub resume_parser_command: Option<Vec<String>>,
    pub resume_parser_timeout_secs: u64,
    pub rapidapi_key: Option<String>,
    pub search_timeout_secs: u64,
    pub chat_context_turns: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let ai_provider = match optional_env("AI_PROVIDER") {
            Some(name) => LlmProvider::from_name(&name)
                .with_context(|| format!("AI_PROVIDER '{name}' is not one of: openai, gemini"))?,
            None => LlmProvider::OpenAi,
        };

        let resume_parser_command = optional_env("RESUME_PARSER_COMMAND")
            .map(|raw| raw.split_whitespace().map(String::from).collect::<Vec<_>>());
        if matches!(&resume_parser_command, Some(parts) if parts.is_empty()) {
            bail!("RESUME_PARSER_COMMAND must name a program");
        }

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            ai_api_key: optional_env("AI_API_KEY"),
            ai_model: optional_env("AI_MODEL")
                .unwrap_or_else(|| ai_provider.default_model().to_string()),
            ai_base_url: optional_env("AI_BASE_URL")
                .unwrap_or_else(|| ai_provider.base_url().to_string()),
            ai_provider,
            database_url: optional_env("DATABASE_URL"),
            redis_url: optional_env("REDIS_URL"),
            resume_parser_command,
            resume_parser_timeout_secs: parse_env("RESUME_PARSER_TIMEOUT_SECS", 30)?,
            rapidapi_key: optional_env("RAPIDAPI_KEY"),
            search_timeout_secs: parse_env("SEARCH_TIMEOUT_SECS", 20)?,
            chat_context_turns: parse_env("CHAT_CONTEXT_TURNS", 10)?,
        })
    }
}

/// Treats unset and blank variables the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
