use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::document::PageSeparator;

pub const DEFAULT_COHERE_BASE_URL: &str = "https://api.cohere.ai/v1";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Settings handed to the generation client at startup.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Missing credentials are reported on the first generation call, not here.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: Option<String>,
    pub timeout: Option<Duration>,
}

/// Application configuration loaded from environment variables.
/// Only malformed values fail startup; every variable has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub generation: GenerationConfig,
    pub page_separator: PageSeparator,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let timeout = match optional_env("GENERATION_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(
                raw.parse::<u64>()
                    .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")?,
            )),
            None => None,
        };

        Ok(Config {
            generation: GenerationConfig {
                api_key: optional_env("COHERE_API_KEY"),
                base_url: optional_env("COHERE_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_COHERE_BASE_URL.to_string()),
                model: optional_env("COHERE_MODEL"),
                timeout,
            },
            page_separator: parse_page_separator(
                &optional_env("PAGE_SEPARATOR").unwrap_or_else(|| "none".to_string()),
            )?,
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES")
                .map(|raw| raw.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a byte count")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads a variable, treating an empty or whitespace-only value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_page_separator(raw: &str) -> Result<PageSeparator> {
    match raw.to_ascii_lowercase().as_str() {
        "none" | "" => Ok(PageSeparator::None),
        "newline" => Ok(PageSeparator::Newline),
        other => bail!("PAGE_SEPARATOR must be 'none' or 'newline', got '{other}'"),
    }
}
