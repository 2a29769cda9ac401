use async_trait::async_trait;
use gitmentor_scoring::AnalysisResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::MentorConfig;
use crate::error::MentorError;
use crate::narrative::{ProfileFeedback, Roadmap};
use crate::prompts::{feedback_prompt, roadmap_prompt, strip_code_fences};

/// Produces qualitative career guidance.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Feedback on an analyzed profile.
    async fn analyze_profile(&self, analysis: &AnalysisResult)
        -> Result<ProfileFeedback, MentorError>;

    /// A learning roadmap for `goal`. Blank goals are rejected.
    async fn generate_roadmap(&self, goal: &str) -> Result<Roadmap, MentorError>;
}

/// [`NarrativeGenerator`] backed by the Gemini `generateContent` API.
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    config: MentorConfig,
    client: reqwest::Client,
}

impl GeminiGenerator {
    pub fn new(config: MentorConfig) -> Result<Self, MentorError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(MentorError::Client)?;
        Ok(Self { config, client })
    }

    /// Build a generator from `GEMINI_API_KEY` and related variables.
    pub fn from_env() -> Result<Self, MentorError> {
        Self::new(MentorConfig::from_env()?)
    }

    pub fn config(&self) -> &MentorConfig {
        &self.config
    }

    /// Send one prompt and return the reply text.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, MentorError> {
        let url = self.config.generate_url();
        tracing::debug!(model = %self.config.model, "requesting Gemini completion");

        let resp = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&GenerateBody::json_reply(prompt))
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        let parsed: Value = serde_json::from_str(&text).unwrap_or_else(|_| json!({ "raw": text }));

        if !status.is_success() {
            let message = parsed
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or("gemini call failed")
                .to_string();
            return Err(MentorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        extract_candidate_text(&parsed).ok_or_else(|| MentorError::EmptyResponse {
            reason: block_reason(&parsed),
        })
    }

    async fn generate_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        kind: &'static str,
    ) -> Result<T, MentorError> {
        let reply = self.generate_text(prompt).await?;
        parse_reply(&reply, kind)
    }
}

#[async_trait]
impl NarrativeGenerator for GeminiGenerator {
    async fn analyze_profile(
        &self,
        analysis: &AnalysisResult,
    ) -> Result<ProfileFeedback, MentorError> {
        let analysis_json =
            serde_json::to_string_pretty(analysis).map_err(MentorError::Serialize)?;
        let prompt = feedback_prompt(&analysis_json, self.config.response_language.as_deref());
        self.generate_json(&prompt, "feedback").await
    }

    async fn generate_roadmap(&self, goal: &str) -> Result<Roadmap, MentorError> {
        if goal.trim().is_empty() {
            return Err(MentorError::EmptyGoal);
        }
        let prompt = roadmap_prompt(goal, self.config.response_language.as_deref());
        self.generate_json(&prompt, "roadmap").await
    }
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

impl<'a> GenerateBody<'a> {
    fn json_reply(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        }
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_candidate_text(v: &Value) -> Option<String> {
    let parts = v
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn block_reason(v: &Value) -> Option<String> {
    v.get("promptFeedback")
        .and_then(|f| f.get("blockReason"))
        .or_else(|| {
            v.get("candidates")
                .and_then(|c| c.get(0))
                .and_then(|c| c.get("finishReason"))
        })
        .and_then(|r| r.as_str())
        .map(str::to_string)
}

fn parse_reply<T: DeserializeOwned>(reply: &str, kind: &'static str) -> Result<T, MentorError> {
    serde_json::from_str(strip_code_fences(reply))
        .map_err(|source| MentorError::InvalidJson { kind, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_debug_hides_api_key() {
        let generator =
            GeminiGenerator::new(MentorConfig::new("secret-gemini-key").unwrap()).unwrap();
        let debug_output = format!("{generator:?}");
        assert!(!debug_output.contains("secret-gemini-key"));
        assert!(debug_output.contains("[REDACTED]"));
    }

    #[test]
    fn test_extract_candidate_text_concatenates_parts() {
        let v = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"summary\":" }, { "text": " \"ok\"}" }] }
            }]
        });
        assert_eq!(
            extract_candidate_text(&v).as_deref(),
            Some("{\"summary\": \"ok\"}")
        );
    }

    #[test]
    fn test_extract_candidate_text_missing() {
        assert!(extract_candidate_text(&json!({ "candidates": [] })).is_none());
        assert!(extract_candidate_text(&json!({})).is_none());
    }

    #[test]
    fn test_block_reason_prefers_prompt_feedback() {
        let v = json!({
            "promptFeedback": { "blockReason": "SAFETY" },
            "candidates": [{ "finishReason": "OTHER" }]
        });
        assert_eq!(block_reason(&v).as_deref(), Some("SAFETY"));
        let v = json!({ "candidates": [{ "finishReason": "MAX_TOKENS" }] });
        assert_eq!(block_reason(&v).as_deref(), Some("MAX_TOKENS"));
    }

    #[test]
    fn test_body_requests_json() {
        let body = serde_json::to_value(GenerateBody::json_reply("hello")).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }],
                "generationConfig": { "responseMimeType": "application/json" }
            })
        );
    }

    #[test]
    fn test_parse_reply_rejects_invalid_json() {
        let err = parse_reply::<Roadmap>("not json", "roadmap").unwrap_err();
        assert!(matches!(err, MentorError::InvalidJson { kind: "roadmap", .. }));
    }

    #[test]
    fn test_parse_reply_accepts_fenced_json() {
        let roadmap: Roadmap =
            parse_reply("```json\n{\"career_goal\": \"Backend\"}\n```", "roadmap").unwrap();
        assert_eq!(roadmap.career_goal, "Backend");
    }
}
