use std::time::Duration;

use reqwest::Url;

use crate::error::MentorError;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const DEFAULT_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_MS: u64 = 120_000;

const BASE_VAR: &str = "GITMENTOR_GEMINI_BASE_URL";
const MODEL_VAR: &str = "GITMENTOR_GEMINI_MODEL";
const TIMEOUT_VAR: &str = "GITMENTOR_GEMINI_TIMEOUT_MS";
const LANGUAGE_VAR: &str = "GITMENTOR_RESPONSE_LANGUAGE";

/// Settings for the Gemini-backed generator.
///
/// Passed explicitly to [`crate::GeminiGenerator::new`]; nothing is read from
/// process-wide state after construction.
#[derive(Clone, PartialEq)]
pub struct MentorConfig {
    pub api_key: String,
    /// API root; always ends with `/`.
    pub base_url: Url,
    pub model: String,
    pub timeout: Duration,
    /// Language the narrative should be written in, if not the model's default.
    pub response_language: Option<String>,
}

impl std::fmt::Debug for MentorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MentorConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url.as_str())
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("response_language", &self.response_language)
            .finish()
    }
}

impl MentorConfig {
    /// Create a configuration with defaults, rejecting a blank key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, MentorError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(MentorError::MissingApiKey(API_KEY_VAR.to_string()));
        }
        Ok(Self {
            api_key,
            base_url: parse_base(DEFAULT_BASE, BASE_VAR)?,
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            response_language: None,
        })
    }

    /// Create configuration from environment variables.
    ///
    /// Fails fast when `GEMINI_API_KEY` is missing or blank. Optional:
    /// - GITMENTOR_GEMINI_BASE_URL
    /// - GITMENTOR_GEMINI_MODEL
    /// - GITMENTOR_GEMINI_TIMEOUT_MS (invalid values fall back to the default)
    /// - GITMENTOR_RESPONSE_LANGUAGE
    pub fn from_env() -> Result<Self, MentorError> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| MentorError::MissingApiKey(API_KEY_VAR.to_string()))?;
        let mut config = Self::new(api_key)?;

        if let Ok(base) = std::env::var(BASE_VAR) {
            config.base_url = parse_base(&base, BASE_VAR)?;
        }
        if let Ok(model) = std::env::var(MODEL_VAR) {
            if !model.trim().is_empty() {
                config.model = model.trim().to_string();
            }
        }
        if let Ok(raw) = std::env::var(TIMEOUT_VAR) {
            match raw.parse::<u64>() {
                Ok(ms) => config.timeout = Duration::from_millis(ms),
                Err(_) => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_TIMEOUT_MS,
                    "Invalid GITMENTOR_GEMINI_TIMEOUT_MS value, using default"
                ),
            }
        }
        config.response_language = std::env::var(LANGUAGE_VAR)
            .ok()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());

        Ok(config)
    }

    pub fn with_base_url(mut self, base: &str) -> Result<Self, MentorError> {
        self.base_url = parse_base(base, BASE_VAR)?;
        Ok(self)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_response_language(mut self, language: Option<String>) -> Self {
        self.response_language = language;
        self
    }

    /// Endpoint for a `generateContent` call with the configured model.
    pub fn generate_url(&self) -> Url {
        let relative = format!("models/{}:generateContent", self.model);
        self.base_url
            .join(&relative)
            .unwrap_or_else(|_| self.base_url.clone())
    }
}

/// Parse a base url, adding the trailing slash `Url::join` needs.
fn parse_base(raw: &str, var: &str) -> Result<Url, MentorError> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Url::parse(&normalized).map_err(|source| MentorError::InvalidBaseUrl {
        var: var.to_string(),
        url: raw.to_string(),
        source,
    })
}
