use std::time::Duration;

use anyhow::{Context, Result};

use crate::fonts::observer::DEFAULT_TIMEOUT;

const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_FONTS_CSS_URL: &str = "https://fonts.googleapis.com/css2";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    /// Base URL of the generative-text API, without the `/models/...` suffix.
    pub gemini_api_url: String,
    /// Stylesheet endpoint used when loading web fonts for design results.
    pub fonts_css_url: String,
    pub font_load_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let font_load_timeout = match std::env::var("FONT_LOAD_TIMEOUT_MS") {
            Ok(ms) => Duration::from_millis(
                ms.parse::<u64>()
                    .context("FONT_LOAD_TIMEOUT_MS must be a whole number of milliseconds")?,
            ),
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_url: env_or("GEMINI_API_URL", DEFAULT_GEMINI_API_URL),
            fonts_css_url: env_or("FONTS_CSS_URL", DEFAULT_FONTS_CSS_URL),
            font_load_timeout,
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

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
