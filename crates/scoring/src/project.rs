//! Per-repository quality heuristics.
//!
//! Each signal adds a fixed amount to a repository's contribution, so a
//! single repository never contributes more than 1.0. The open issue signal
//! rewards engagement rather than health, and is kept as-is.

use serde::{Deserialize, Serialize};

use crate::types::{RepositoryFacts, MAX_SCORE};

/// Repositories larger than this earn the size bonus.
pub const SIZE_THRESHOLD: u64 = 200;
/// Repositories with more open issues than this earn the engagement bonus.
pub const OPEN_ISSUE_THRESHOLD: u64 = 1;

const SIZE_WEIGHT: f64 = 0.4;
const README_WEIGHT: f64 = 0.2;
const TESTS_WEIGHT: f64 = 0.3;
const ISSUES_WEIGHT: f64 = 0.1;

/// Which quality signals one repository triggered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryContribution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub large: bool,
    pub documented: bool,
    pub tested: bool,
    pub engaged: bool,
    /// Sum of the triggered weights.
    pub value: f64,
}

/// Intermediate factors behind the project score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectBreakdown {
    pub contributions: Vec<RepositoryContribution>,
    /// Sum of all contributions.
    pub raw_score: f64,
    /// `raw_score / repository_count`, capped at 1.
    pub average_quality: f64,
    /// Result in `[0, 10]`.
    pub score: f64,
}

/// Score a single repository's quality signals.
pub fn repository_contribution(repo: &RepositoryFacts) -> RepositoryContribution {
    let large = repo.size > SIZE_THRESHOLD;
    let engaged = repo.open_issue_count > OPEN_ISSUE_THRESHOLD;

    let mut value = 0.0;
    if large {
        value += SIZE_WEIGHT;
    }
    if repo.has_readme {
        value += README_WEIGHT;
    }
    if repo.has_tests {
        value += TESTS_WEIGHT;
    }
    if engaged {
        value += ISSUES_WEIGHT;
    }

    RepositoryContribution {
        name: repo.name.clone(),
        large,
        documented: repo.has_readme,
        tested: repo.has_tests,
        engaged,
        value,
    }
}

/// Compute the project score together with per-repository contributions.
pub fn project_breakdown(repositories: &[RepositoryFacts]) -> ProjectBreakdown {
    if repositories.is_empty() {
        return ProjectBreakdown::default();
    }

    let contributions: Vec<_> = repositories.iter().map(repository_contribution).collect();
    let raw_score: f64 = contributions.iter().map(|c| c.value).sum();
    let average_quality = (raw_score / repositories.len() as f64).min(1.0);
    let score = average_quality * MAX_SCORE;

    tracing::trace!(
        repositories = repositories.len(),
        raw_score,
        score,
        "project score"
    );

    ProjectBreakdown {
        contributions,
        raw_score,
        average_quality,
        score,
    }
}

/// Score average repository quality in `[0, 10]`.
pub fn project_score(repositories: &[RepositoryFacts]) -> f64 {
    project_breakdown(repositories).score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_repositories_score_zero() {
        assert_eq!(project_score(&[]), 0.0);
    }

    #[test]
    fn test_large_documented_repo_scenario() {
        let repos = [RepositoryFacts::new(300, 0, true, false)];
        assert!((project_score(&repos) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let at_threshold = repository_contribution(&RepositoryFacts::new(200, 1, false, false));
        assert!(!at_threshold.large);
        assert!(!at_threshold.engaged);
        assert_eq!(at_threshold.value, 0.0);

        let above = repository_contribution(&RepositoryFacts::new(201, 2, false, false));
        assert!(above.large);
        assert!(above.engaged);
        assert!((above.value - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_full_marks_repo_caps_at_ten() {
        let repos = [RepositoryFacts::new(1000, 5, true, true)];
        let breakdown = project_breakdown(&repos);
        assert!((breakdown.raw_score - 1.0).abs() < 1e-9);
        assert_eq!(breakdown.score, 10.0);
    }

    #[test]
    fn test_score_is_average_over_repositories() {
        let repos = [
            RepositoryFacts::new(300, 0, true, true).with_name("good"),
            RepositoryFacts::new(10, 0, false, false).with_name("empty"),
        ];
        let breakdown = project_breakdown(&repos);
        assert_eq!(breakdown.contributions.len(), 2);
        assert_eq!(breakdown.contributions[1].name.as_deref(), Some("empty"));
        // (0.9 + 0.0) / 2
        assert!((breakdown.score - 4.5).abs() < 1e-9);
    }
}
