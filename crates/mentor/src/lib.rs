//! Narrative generation for gitmentor.
//!
//! Turns an [`gitmentor_scoring::AnalysisResult`] into qualitative career
//! feedback and turns a career goal into a 30/60/90 day roadmap, using the
//! Gemini `generateContent` API with JSON replies.

pub mod config;
mod error;
mod gemini;
pub mod narrative;
mod prompts;

pub use config::MentorConfig;
pub use error::MentorError;
pub use gemini::{GeminiGenerator, NarrativeGenerator};
pub use narrative::{
    CareerPath, EssentialTool, PracticalProject, ProfileFeedback, Roadmap, StudyPlan,
};
pub use prompts::strip_code_fences;
