use thiserror::Error;

/// Errors returned by the narrative generator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MentorError {
    /// No API key was configured.
    #[error("{0} must be set to generate feedback")]
    MissingApiKey(String),

    #[error("invalid {var} url '{url}': {source}")]
    InvalidBaseUrl {
        var: String,
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("career goal cannot be empty")]
    EmptyGoal,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("calling Gemini API failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The API answered without any text to parse.
    #[error("Gemini returned no text{}", .reason.as_deref().map(|r| format!(" ({r})")).unwrap_or_default())]
    EmptyResponse { reason: Option<String> },

    /// The generated text is not the JSON document that was asked for.
    #[error("generated {kind} is not valid JSON: {source}")]
    InvalidJson {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize analysis for the prompt: {0}")]
    Serialize(#[source] serde_json::Error),
}
