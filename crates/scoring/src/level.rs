//! Skill tiers derived from the final score.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scores at or below this value are classified as beginner.
pub const BEGINNER_MAX: f64 = 3.0;
/// Scores at or below this value (and above [`BEGINNER_MAX`]) are intermediate.
pub const INTERMEDIATE_MAX: f64 = 6.5;

/// Final skill classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Classify an unrounded final score.
    pub fn from_score(score: f64) -> Self {
        if score <= BEGINNER_MAX {
            SkillLevel::Beginner
        } else if score <= INTERMEDIATE_MAX {
            SkillLevel::Intermediate
        } else {
            SkillLevel::Advanced
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string does not name a skill level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown skill level: '{0}' (expected beginner, intermediate or advanced)")]
pub struct ParseSkillLevelError(pub String);

impl std::str::FromStr for SkillLevel {
    type Err = ParseSkillLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(ParseSkillLevelError(s.to_string())),
        }
    }
}
