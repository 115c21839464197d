use std::env;
use std::time::Duration;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    pub gemini_api_key: String,
    /// Gemini API base URL (defaults to the public endpoint).
    pub gemini_api_url: String,
    /// Model name for generateContent calls.
    pub gemini_model: String,
    /// Per-analyzer attempt timeout in seconds.
    pub timeout_secs: u64,
    /// Additional attempts after the first failure.
    pub retry_attempts: u32,
}

pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything except the API key has a default; the key is only
    /// required once an actual analysis runs (see `require_provider`).
    pub fn load() -> Result<Self> {
        let timeout_secs = env::var("VERACITY_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        let retry_attempts = env::var("VERACITY_RETRY_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);

        Ok(Self {
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            timeout_secs,
            retry_attempts,
        })
    }

    /// Check that the inference provider is configured.
    /// Call this before any operation that issues provider calls.
    pub fn require_provider(&self) -> Result<()> {
        if self.gemini_api_key.is_empty() {
            anyhow::bail!(
                "GEMINI_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }

    /// Execution options derived from this config.
    pub fn analysis_options(&self) -> crate::pipeline::AnalysisOptions {
        crate::pipeline::AnalysisOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            retry_attempts: self.retry_attempts,
        }
    }
}
