//! Commit consistency scoring over the recent window.

use serde::{Deserialize, Serialize};

use crate::types::MAX_SCORE;

/// Number of most recent weeks considered.
pub const RECENT_WEEKS: usize = 12;
/// Average weekly commits that earn a full commit score.
const TARGET_WEEKLY_COMMITS: f64 = 10.0;
const CONSISTENCY_WEIGHT: f64 = 0.6;
const VOLUME_WEIGHT: f64 = 0.4;

/// Intermediate factors behind the activity score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityBreakdown {
    /// Number of weeks in the recent window.
    pub window_weeks: usize,
    /// Weeks in the window with at least one commit.
    pub active_weeks: usize,
    /// Mean commits per week across the window.
    pub average_commits: f64,
    /// `min(average / 10, 1)`.
    pub commit_score: f64,
    /// `active_weeks / window_weeks`.
    pub consistency: f64,
    /// Weighted result in `[0, 10]`.
    pub score: f64,
}

/// Returns the most recent `RECENT_WEEKS` entries (or all of them if fewer).
pub fn recent_window(weekly_commits: &[u64]) -> &[u64] {
    let start = weekly_commits.len().saturating_sub(RECENT_WEEKS);
    &weekly_commits[start..]
}

/// Compute the activity score together with its factors.
pub fn activity_breakdown(weekly_commits: &[u64]) -> ActivityBreakdown {
    let window = recent_window(weekly_commits);
    if window.is_empty() {
        return ActivityBreakdown::default();
    }

    let window_weeks = window.len();
    let total: u128 = window.iter().map(|&week| u128::from(week)).sum();
    let average_commits = total as f64 / window_weeks as f64;
    let active_weeks = window.iter().filter(|&&w| w > 0).count();

    let commit_score = (average_commits / TARGET_WEEKLY_COMMITS).min(1.0);
    let consistency = active_weeks as f64 / window_weeks as f64;
    let score = (CONSISTENCY_WEIGHT * consistency + VOLUME_WEIGHT * commit_score) * MAX_SCORE;

    tracing::trace!(
        window_weeks,
        active_weeks,
        average_commits,
        score,
        "activity score"
    );

    ActivityBreakdown {
        window_weeks,
        active_weeks,
        average_commits,
        commit_score,
        consistency,
        score,
    }
}

/// Score recent commit activity in `[0, 10]`, weighting consistency above volume.
pub fn activity_score(weekly_commits: &[u64]) -> f64 {
    activity_breakdown(weekly_commits).score
}
