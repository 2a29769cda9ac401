//! Aggregation of sub-scores into the reported analysis.

use serde::{Deserialize, Serialize};

use crate::activity::{activity_breakdown, ActivityBreakdown};
use crate::language::{language_breakdown, LanguageBreakdown};
use crate::level::SkillLevel;
use crate::project::{project_breakdown, ProjectBreakdown};
use crate::ranking::{main_languages, RankedLanguage};
use crate::types::{ProfileSnapshot, Score};

const LANGUAGE_WEIGHT: f64 = 0.4;
const ACTIVITY_WEIGHT: f64 = 0.3;
const PROJECT_WEIGHT: f64 = 0.3;

/// Scored view of a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Up to three most used languages.
    pub main_languages: Vec<RankedLanguage>,
    pub language_score: Score,
    pub activity_score: Score,
    pub project_score: Score,
    /// Weighted aggregate, rounded to two decimals.
    pub final_score: Score,
    /// Tier computed from the unrounded aggregate.
    pub final_skill_level: SkillLevel,
    pub total_repositories: usize,
}

/// Analysis plus the factors that produced each sub-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub result: AnalysisResult,
    pub language: LanguageBreakdown,
    pub activity: ActivityBreakdown,
    pub project: ProjectBreakdown,
    /// Aggregate before rounding.
    pub unrounded_final_score: f64,
}

/// Weighted combination of the three sub-scores.
pub fn aggregate(language_score: f64, activity_score: f64, project_score: f64) -> f64 {
    language_score * LANGUAGE_WEIGHT
        + activity_score * ACTIVITY_WEIGHT
        + project_score * PROJECT_WEIGHT
}

/// Round to two decimal places for reporting.
pub fn round_score(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score a profile and keep the intermediate factors.
pub fn analyze_detailed(snapshot: &ProfileSnapshot) -> DetailedAnalysis {
    let language = language_breakdown(&snapshot.languages);
    let activity = activity_breakdown(&snapshot.weekly_commit_activity);
    let project = project_breakdown(&snapshot.repositories);

    let unrounded = aggregate(language.score, activity.score, project.score);
    let level = SkillLevel::from_score(unrounded);

    tracing::debug!(
        language = language.score,
        activity = activity.score,
        project = project.score,
        final_score = unrounded,
        level = %level,
        "scored profile"
    );

    let result = AnalysisResult {
        main_languages: main_languages(&snapshot.languages),
        language_score: Score::new(language.score),
        activity_score: Score::new(activity.score),
        project_score: Score::new(project.score),
        final_score: Score::new(round_score(unrounded)),
        final_skill_level: level,
        total_repositories: snapshot.repositories.len(),
    };

    DetailedAnalysis {
        result,
        language,
        activity,
        project,
        unrounded_final_score: unrounded,
    }
}

/// Score a profile.
///
/// Pure and deterministic: identical snapshots always produce identical
/// results, and empty containers score zero instead of failing.
pub fn analyze(snapshot: &ProfileSnapshot) -> AnalysisResult {
    analyze_detailed(snapshot).result
}
