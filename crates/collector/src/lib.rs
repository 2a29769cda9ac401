//! GitHub profile collection for gitmentor.
//!
//! Fetches a user's public repositories and per-repository weekly commit
//! activity, and folds them into a [`gitmentor_scoring::ProfileSnapshot`].
//! Failures are returned as [`CollectorError`] without retries.

pub mod config;
mod error;
mod github;
pub mod profile;

pub use config::CollectorConfig;
pub use error::CollectorError;
pub use github::{GitHubCollector, ProfileSource};
pub use profile::{
    build_snapshot, combine_weekly_activity, language_usage, repository_facts, validate_username,
    RepoSummary,
};
