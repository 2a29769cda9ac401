use thiserror::Error;

/// Errors returned while collecting a profile from GitHub.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CollectorError {
    /// The username cannot be a GitHub login.
    #[error("invalid GitHub username '{username}': {reason}")]
    InvalidUsername {
        username: String,
        reason: &'static str,
    },

    #[error("GitHub user '{0}' not found")]
    UserNotFound(String),

    #[error("GitHub API authentication failed. Verify your GITHUB_TOKEN is valid. (HTTP {status})")]
    Unauthorized { status: u16 },

    #[error("GitHub API rate limit exceeded. Wait a few minutes and try again, or set GITHUB_TOKEN for higher limits.")]
    RateLimited,

    #[error("GitHub API access forbidden: {message}")]
    Forbidden { message: String },

    /// Any other non-success response.
    #[error("GitHub API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("invalid GitHub API base url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to GitHub failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected GitHub response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CollectorError {
    /// Map a non-success status and body to the matching error.
    pub(crate) fn from_status(status: u16, body: String, username: &str) -> Self {
        match status {
            401 => Self::Unauthorized { status },
            403 if body.to_lowercase().contains("rate limit") => Self::RateLimited,
            403 => Self::Forbidden {
                message: if body.is_empty() {
                    "check your GITHUB_TOKEN permissions".to_string()
                } else {
                    body
                },
            },
            404 => Self::UserNotFound(username.to_string()),
            _ => Self::Api { status, body },
        }
    }

    /// Like [`Self::from_status`], for per-repository endpoints where a 404
    /// says nothing about the user.
    pub(crate) fn from_activity_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::from_status(status, body, ""),
            _ => Self::Api { status, body },
        }
    }

    /// Whether this failure would hit every following request as well.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. } | Self::RateLimited | Self::Forbidden { .. }
        )
    }
}
