//! Mapping from GitHub payloads to scoring inputs.
//!
//! The README and test signals are rough: `has_readme` mirrors the
//! repository's `has_downloads` flag, and `has_tests` only looks for "test"
//! in the repository name. Scores depend on these exact rules.

use gitmentor_scoring::{LanguageUsage, ProfileSnapshot, RepositoryFacts};
use serde::{Deserialize, Serialize};

use crate::error::CollectorError;

/// GitHub caps logins at this many characters.
const MAX_USERNAME_LEN: usize = 39;

/// The subset of a GitHub repository listing the collector uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    /// Primary language detected by GitHub.
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub has_downloads: bool,
    #[serde(default)]
    pub fork: bool,
}

/// One week of a `stats/commit_activity` response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WeekActivity {
    #[serde(default)]
    pub total: u64,
}

/// Reject strings that cannot be GitHub logins before any request is made.
pub fn validate_username(raw: &str) -> Result<&str, CollectorError> {
    let username = raw.trim();
    let invalid = |reason| CollectorError::InvalidUsername {
        username: raw.to_string(),
        reason,
    };

    if username.is_empty() {
        return Err(invalid("username cannot be empty"));
    }
    if username.len() > MAX_USERNAME_LEN {
        return Err(invalid("username is longer than 39 characters"));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(invalid("only ASCII letters, digits and '-' are allowed"));
    }
    if username.starts_with('-') || username.ends_with('-') {
        return Err(invalid("username cannot start or end with '-'"));
    }
    Ok(username)
}

/// Count repositories per primary language, in listing order.
pub fn language_usage(repos: &[RepoSummary]) -> LanguageUsage {
    let mut usage = LanguageUsage::new();
    for lang in repos.iter().filter_map(|r| r.language.as_deref()) {
        *usage.entry(lang.to_string()).or_insert(0) += 1;
    }
    usage
}

/// Derive the scoring facts for one repository.
pub fn repository_facts(repo: &RepoSummary) -> RepositoryFacts {
    RepositoryFacts {
        name: Some(repo.name.clone()),
        size: repo.size,
        open_issue_count: repo.open_issues_count,
        has_readme: repo.has_downloads,
        has_tests: repo.name.to_lowercase().contains("test"),
    }
}

/// Sum weekly series position by position.
///
/// Empty series are skipped; the result is as long as the shortest
/// remaining series.
pub fn combine_weekly_activity(series: &[Vec<u64>]) -> Vec<u64> {
    let non_empty: Vec<&Vec<u64>> = series.iter().filter(|s| !s.is_empty()).collect();
    let Some(weeks) = non_empty.iter().map(|s| s.len()).min() else {
        return Vec::new();
    };

    (0..weeks)
        .map(|week| {
            non_empty
                .iter()
                .fold(0u64, |total, s| total.saturating_add(s[week]))
        })
        .collect()
}

/// Assemble a snapshot from a repository listing and per-repository activity.
pub fn build_snapshot(repos: &[RepoSummary], activity: &[Vec<u64>]) -> ProfileSnapshot {
    ProfileSnapshot {
        languages: language_usage(repos),
        repositories: repos.iter().map(repository_facts).collect(),
        weekly_commit_activity: combine_weekly_activity(activity),
    }
}
