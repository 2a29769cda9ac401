//! Profile data consumed by the scoring engine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Upper bound of every score produced by this crate.
pub const MAX_SCORE: f64 = 10.0;

/// Language name to usage count, kept in the order languages were encountered.
pub type LanguageUsage = IndexMap<String, u64>;

/// Quality facts about a single repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryFacts {
    /// Repository name, carried for reporting only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Repository size in the hosting platform's unit.
    #[serde(default)]
    pub size: u64,
    /// Number of open issues.
    #[serde(default)]
    pub open_issue_count: u64,
    /// Whether the repository is considered documented.
    #[serde(default)]
    pub has_readme: bool,
    /// Whether the repository is considered tested.
    #[serde(default)]
    pub has_tests: bool,
}

impl RepositoryFacts {
    /// Create facts for an unnamed repository.
    pub fn new(size: u64, open_issue_count: u64, has_readme: bool, has_tests: bool) -> Self {
        Self {
            name: None,
            size,
            open_issue_count,
            has_readme,
            has_tests,
        }
    }

    /// Attach a repository name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Fully materialized capture of one account's public activity.
///
/// Containers may be empty but are never absent; deserializing a snapshot
/// with a missing field yields an empty container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Usage count per language.
    #[serde(default)]
    pub languages: LanguageUsage,
    /// One entry per repository, in the order the source listed them.
    #[serde(default)]
    pub repositories: Vec<RepositoryFacts>,
    /// Total commits per calendar week, oldest first.
    #[serde(default)]
    pub weekly_commit_activity: Vec<u64>,
}

impl ProfileSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of usage for `language`.
    pub fn record_language(&mut self, language: impl Into<String>) {
        *self.languages.entry(language.into()).or_insert(0) += 1;
    }

    /// Whether the snapshot carries no data at all.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
            && self.repositories.is_empty()
            && self.weekly_commit_activity.is_empty()
    }
}

/// A score clamped to the `[0.0, 10.0]` range.
///
/// # Examples
///
/// ```
/// use gitmentor_scoring::Score;
///
/// assert_eq!(Score::new(6.4).value(), 6.4);
/// assert_eq!(Score::new(12.0).value(), 10.0);
/// assert_eq!(Score::new(-1.0).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Create a new score, clamping the value to `[0.0, 10.0]`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::zero();
        }
        Self(value.clamp(0.0, MAX_SCORE))
    }

    /// Get the inner value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn zero() -> Self {
        Self(0.0)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
