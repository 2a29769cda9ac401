//! Language breadth and depth scoring.

use serde::{Deserialize, Serialize};

use crate::types::{LanguageUsage, MAX_SCORE};

/// Number of languages at which breadth stops paying off.
const DIVERSITY_TARGET: f64 = 5.0;
const DEPTH_WEIGHT: f64 = 0.6;
const DIVERSITY_WEIGHT: f64 = 0.4;

/// Intermediate factors behind the language score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageBreakdown {
    /// Number of distinct languages.
    pub distinct_languages: usize,
    /// Sum of all usage counts, widened so large counts cannot overflow.
    pub total_usage: u128,
    /// `min(distinct / 5, 1)`.
    pub diversity_factor: f64,
    /// Share of usage held by the dominant language.
    pub depth_factor: f64,
    /// Weighted result in `[0, 10]`.
    pub score: f64,
}

/// Compute the language score together with its factors.
pub fn language_breakdown(languages: &LanguageUsage) -> LanguageBreakdown {
    let total_usage: u128 = languages.values().map(|&count| u128::from(count)).sum();
    if languages.is_empty() || total_usage == 0 {
        return LanguageBreakdown {
            distinct_languages: languages.len(),
            ..Default::default()
        };
    }

    let distinct_languages = languages.len();
    let diversity_factor = (distinct_languages as f64 / DIVERSITY_TARGET).min(1.0);
    let dominant = languages.values().copied().max().unwrap_or(0);
    let depth_factor = dominant as f64 / total_usage as f64;

    let score = (DEPTH_WEIGHT * depth_factor + DIVERSITY_WEIGHT * diversity_factor) * MAX_SCORE;

    tracing::trace!(
        distinct_languages,
        total_usage,
        diversity_factor,
        depth_factor,
        score,
        "language score"
    );

    LanguageBreakdown {
        distinct_languages,
        total_usage,
        diversity_factor,
        depth_factor,
        score,
    }
}

/// Score language usage in `[0, 10]`, weighting depth above breadth.
pub fn language_score(languages: &LanguageUsage) -> f64 {
    language_breakdown(languages).score
}
