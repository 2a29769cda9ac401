//! GitHub REST client for public profile data.

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use gitmentor_scoring::ProfileSnapshot;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::CollectorConfig;
use crate::error::CollectorError;
use crate::profile::{build_snapshot, validate_username, RepoSummary, WeekActivity};

const USER_AGENT_VALUE: &str = concat!("gitmentor-collector/", env!("CARGO_PKG_VERSION"));
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Anything that can produce a [`ProfileSnapshot`] for a username.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn collect_profile(&self, username: &str) -> Result<ProfileSnapshot, CollectorError>;
}

/// Collects repositories and commit activity from the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubCollector {
    config: CollectorConfig,
    client: reqwest::Client,
}

impl GitHubCollector {
    pub fn new(config: CollectorConfig) -> Result<Self, CollectorError> {
        let config = config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CollectorError::Client)?;
        Ok(Self { config, client })
    }

    /// Build a collector from environment variables.
    pub fn from_env() -> Result<Self, CollectorError> {
        Self::new(CollectorConfig::from_env())
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);
        match &self.config.token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    /// List the user's public repositories, following pages.
    pub async fn fetch_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<RepoSummary>, CollectorError> {
        let username = validate_username(username)?;
        let url = format!("{}/users/{}/repos", self.config.api_base, username);
        let per_page = self.config.per_page.to_string();
        let mut repos = Vec::new();

        for page in 1..=self.config.max_pages {
            debug!(%url, page, "fetching repositories");
            let page_param = page.to_string();
            let response = self
                .get(&url)
                .query(&[("per_page", per_page.as_str()), ("page", page_param.as_str())])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(CollectorError::from_status(status.as_u16(), body, username));
            }

            let text = response.text().await?;
            let batch: Vec<RepoSummary> =
                serde_json::from_str(&text).map_err(|source| CollectorError::Decode {
                    endpoint: url.clone(),
                    source,
                })?;
            let short_page = batch.len() < self.config.per_page as usize;
            repos.extend(batch);
            if short_page {
                break;
            }
            if page == self.config.max_pages {
                warn!(
                    username,
                    max_pages = self.config.max_pages,
                    "repository listing truncated at page limit"
                );
            }
        }

        Ok(repos)
    }

    /// Weekly commit totals for one repository, oldest first.
    ///
    /// GitHub answers 202 while statistics are still being computed; that and
    /// any other non-list payload yield an empty series. Authentication and
    /// rate-limit failures are returned as errors.
    pub async fn commit_activity(
        &self,
        username: &str,
        repo: &str,
    ) -> Result<Vec<u64>, CollectorError> {
        let url = format!(
            "{}/repos/{}/{}/stats/commit_activity",
            self.config.api_base, username, repo
        );
        debug!(%url, "fetching commit activity");
        let response = self.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::ACCEPTED || status == StatusCode::NO_CONTENT {
            debug!(repo, status = status.as_u16(), "commit activity not ready");
            return Ok(Vec::new());
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = CollectorError::from_activity_status(status.as_u16(), body);
            if err.is_fatal() {
                return Err(err);
            }
            warn!(repo, error = %err, "skipping commit activity");
            return Ok(Vec::new());
        }

        let text = response.text().await?;
        Ok(parse_commit_activity(repo, &text))
    }
}

/// Extract weekly totals, treating anything but a JSON list as no data.
fn parse_commit_activity(repo: &str, text: &str) -> Vec<u64> {
    let value: Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(e) => {
            warn!(repo, error = %e, "commit activity is not JSON");
            return Vec::new();
        }
    };
    if !value.is_array() {
        return Vec::new();
    }
    match serde_json::from_value::<Vec<WeekActivity>>(value) {
        Ok(weeks) => weeks.into_iter().map(|w| w.total).collect(),
        Err(e) => {
            warn!(repo, error = %e, "unexpected commit activity shape");
            Vec::new()
        }
    }
}

#[async_trait]
impl ProfileSource for GitHubCollector {
    async fn collect_profile(&self, username: &str) -> Result<ProfileSnapshot, CollectorError> {
        let username = validate_username(username)?;
        let repos = self.fetch_repositories(username).await?;
        info!(username, repositories = repos.len(), "fetched repositories");

        let requests: Vec<_> = repos
            .iter()
            .map(|repo| self.commit_activity(username, &repo.name))
            .collect();
        let activity: Vec<Vec<u64>> = futures::stream::iter(requests)
            .buffered(self.config.concurrency)
            .try_collect()
            .await?;

        let snapshot = build_snapshot(&repos, &activity);
        info!(
            username,
            languages = snapshot.languages.len(),
            weeks = snapshot.weekly_commit_activity.len(),
            "collected profile"
        );
        Ok(snapshot)
    }
}
