//! Records produced by the narrative generator.
//!
//! Every field defaults when absent so a partially filled model reply still
//! deserializes; only malformed JSON is rejected.

use serde::{Deserialize, Serialize};

/// Qualitative feedback on an analyzed profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileFeedback {
    pub summary: String,
    pub technical_strengths: Vec<String>,
    pub improvement_points: Vec<String>,
    /// Actions for the next 7 to 30 days.
    pub short_term_suggestions: Vec<String>,
    pub career_paths: Vec<CareerPath>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerPath {
    pub title: String,
    /// Fit with the current profile, e.g. "High" or "Medium".
    pub compatibility: String,
    pub required_development: String,
    pub market_opportunities: String,
}

/// A 30/60/90 day learning plan towards a career goal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roadmap {
    pub career_goal: String,
    pub essential_fundamentals: Vec<String>,
    pub practical_projects: Vec<PracticalProject>,
    pub essential_tools: Vec<EssentialTool>,
    pub plan_30_days: Option<StudyPlan>,
    pub plan_60_days: Option<StudyPlan>,
    pub plan_90_days: Option<StudyPlan>,
    pub expected_outcome: String,
}

impl Roadmap {
    /// Plans in chronological order, labelled by their horizon in days.
    pub fn plans(&self) -> [(u32, Option<&StudyPlan>); 3] {
        [
            (30, self.plan_30_days.as_ref()),
            (60, self.plan_60_days.as_ref()),
            (90, self.plan_90_days.as_ref()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticalProject {
    pub title: String,
    pub objective: String,
    pub skills_developed: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EssentialTool {
    pub name: String,
    pub priority: String,
    pub when_to_learn: String,
    pub market_relevance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyPlan {
    pub objectives: Vec<String>,
    pub activities: Vec<String>,
}
