use std::time::Duration;

use crate::error::CollectorError;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_MAX_PAGES: u32 = 10;
pub const DEFAULT_CONCURRENCY: usize = 4;
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// GitHub caps `per_page` at this value.
const MAX_PER_PAGE: u32 = 100;

/// Settings for the GitHub collector.
#[derive(Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    /// REST API root, without a trailing slash.
    pub api_base: String,
    /// Optional token sent as a bearer credential.
    pub token: Option<String>,
    /// Repositories requested per page.
    pub per_page: u32,
    /// Upper bound on pages fetched for one user.
    pub max_pages: u32,
    /// Commit-activity requests kept in flight at once.
    pub concurrency: usize,
    pub timeout: Duration,
}

impl std::fmt::Debug for CollectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectorConfig")
            .field("api_base", &self.api_base)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("per_page", &self.per_page)
            .field("max_pages", &self.max_pages)
            .field("concurrency", &self.concurrency)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token: None,
            per_page: DEFAULT_PER_PAGE,
            max_pages: DEFAULT_MAX_PAGES,
            concurrency: DEFAULT_CONCURRENCY,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl CollectorConfig {
    /// Create configuration from environment variables.
    ///
    /// Looks for:
    /// - GITMENTOR_GITHUB_API_URL: REST API root (default `https://api.github.com`)
    /// - GITHUB_TOKEN: bearer token; blank values are ignored
    /// - GITMENTOR_GITHUB_TIMEOUT_MS: request timeout in milliseconds
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base) = std::env::var("GITMENTOR_GITHUB_API_URL") {
            config = config.with_api_base(base);
        }
        config.token = normalize_token(std::env::var("GITHUB_TOKEN").ok());
        if let Ok(raw) = std::env::var("GITMENTOR_GITHUB_TIMEOUT_MS") {
            match raw.parse::<u64>() {
                Ok(ms) => config.timeout = Duration::from_millis(ms),
                Err(_) => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_TIMEOUT_MS,
                    "Invalid GITMENTOR_GITHUB_TIMEOUT_MS value, using default"
                ),
            }
        }
        config
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = normalize_token(token);
        self
    }

    /// Check that the settings can drive a collector.
    ///
    /// `per_page` is clamped to GitHub's maximum; zero values are rejected.
    pub fn validate(mut self) -> Result<Self, CollectorError> {
        url::Url::parse(&self.api_base).map_err(|source| CollectorError::InvalidBaseUrl {
            url: self.api_base.clone(),
            source,
        })?;
        self.per_page = self.per_page.clamp(1, MAX_PER_PAGE);
        self.max_pages = self.max_pages.max(1);
        self.concurrency = self.concurrency.max(1);
        Ok(self)
    }
}

fn normalize_token(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    let token = raw.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
