use anyhow::{bail, Context, Result};

use crate::llm_client::{DEFAULT_API_BASE, DEFAULT_MODEL};

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Startup fails if `GOOGLE_API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub model_timeout_secs: u64,
    pub cors_origin: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let model_timeout_secs =
            env_or("MODEL_TIMEOUT_SECS", &DEFAULT_MODEL_TIMEOUT_SECS.to_string())
                .parse::<u64>()
                .context("MODEL_TIMEOUT_SECS must be a whole number of seconds")?;
        if model_timeout_secs == 0 {
            bail!("MODEL_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            google_api_key: require_env("GOOGLE_API_KEY")?,
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_MODEL),
            gemini_api_base: env_or("GEMINI_API_BASE", DEFAULT_API_BASE),
            model_timeout_secs,
            cors_origin: env_or("CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => bail!("Required environment variable '{key}' is not set"),
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
