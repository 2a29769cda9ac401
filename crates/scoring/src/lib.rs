//! Deterministic skill scoring for developer profiles.
//!
//! This crate turns a [`ProfileSnapshot`] (language usage, repository facts
//! and weekly commit counts) into an [`AnalysisResult`]:
//! - Language score: depth in a dominant language plus breadth up to 5 languages
//! - Activity score: consistency and volume over the last 12 weeks
//! - Project score: average per-repository quality signals
//! - Final score and [`SkillLevel`] tier
//!
//! Every function here is pure. Empty inputs score zero rather than failing.
//!
//! # Example
//!
//! ```rust
//! use gitmentor_scoring::{analyze, ProfileSnapshot, RepositoryFacts, SkillLevel};
//!
//! let mut snapshot = ProfileSnapshot::new();
//! snapshot.languages.insert("Python".into(), 8);
//! snapshot.languages.insert("Go".into(), 2);
//! snapshot.repositories.push(RepositoryFacts::new(300, 0, true, false));
//! snapshot.weekly_commit_activity = vec![0, 0, 0, 0, 5, 5, 5, 5, 10, 10, 10, 10];
//!
//! let result = analyze(&snapshot);
//! assert_eq!(result.final_score.value(), 6.16);
//! assert_eq!(result.final_skill_level, SkillLevel::Intermediate);
//! ```

#![deny(unsafe_code)]

pub mod activity;
pub mod analysis;
pub mod language;
pub mod level;
pub mod project;
pub mod ranking;
pub mod types;

pub use activity::{activity_breakdown, activity_score, recent_window, ActivityBreakdown};
pub use analysis::{
    aggregate, analyze, analyze_detailed, round_score, AnalysisResult, DetailedAnalysis,
};
pub use language::{language_breakdown, language_score, LanguageBreakdown};
pub use level::{ParseSkillLevelError, SkillLevel};
pub use project::{
    project_breakdown, project_score, repository_contribution, ProjectBreakdown,
    RepositoryContribution,
};
pub use ranking::{main_languages, RankedLanguage};
pub use types::{LanguageUsage, ProfileSnapshot, RepositoryFacts, Score};
