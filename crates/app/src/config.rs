//! Configuration file support for gitmentor.
//!
//! Loads settings from `~/.gitmentor/config.toml` (or the file named by
//! `GITMENTOR_CONFIG`) with the following precedence:
//! CLI arguments > Environment variables > Config file > Defaults
//!
//! ## Configuration File Format
//!
//! ```toml
//! # ~/.gitmentor/config.toml
//!
//! [github]
//! # Token sent as a bearer credential (raises the API rate limit)
//! token = "ghp_..."
//! # REST API root, e.g. for GitHub Enterprise
//! api_url = "https://api.github.com"
//! per_page = 100
//! max_pages = 10
//! # Commit-activity requests kept in flight
//! concurrency = 4
//! timeout_ms = 30000
//!
//! [mentor]
//! api_key = "..."
//! base_url = "https://generativelanguage.googleapis.com/v1beta"
//! model = "gemini-2.5-flash"
//! timeout_ms = 120000
//! response_language = "English"
//! ```

use std::path::PathBuf;

use gitmentor_collector::CollectorConfig;
use gitmentor_mentor::{MentorConfig, MentorError};
use serde::Deserialize;
use thiserror::Error;

use crate::cli::GithubArgs;

const CONFIG_PATH_VAR: &str = "GITMENTOR_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration structure.
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub mentor: MentorFileConfig,
}

/// The `[github]` section.
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct GithubConfig {
    pub token: Option<String>,
    pub api_url: Option<String>,
    pub per_page: Option<u32>,
    pub max_pages: Option<u32>,
    pub concurrency: Option<usize>,
    pub timeout_ms: Option<u64>,
}

/// The `[mentor]` section.
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct MentorFileConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_ms: Option<u64>,
    pub response_language: Option<String>,
}

/// Returns the path to the config file.
///
/// `GITMENTOR_CONFIG` wins over `~/.gitmentor/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_PATH_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|h| h.join(".gitmentor").join("config.toml"))
}

/// Loads the configuration file if it exists.
///
/// Returns `Ok(None)` if the file doesn't exist.
/// Returns `Err` if the file exists but fails to parse.
pub fn load_config() -> Result<Option<Config>, ConfigError> {
    let Some(path) = config_path() else {
        return Ok(None);
    };

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(
        target: "gitmentor::config",
        path = %path.display(),
        "Loaded configuration file"
    );

    Ok(Some(config))
}

/// Applies configuration file settings to environment variables.
///
/// Only sets environment variables that are not already set, preserving
/// the precedence: CLI > ENV > config file.
pub fn apply_config_to_env(config: &Config) {
    fn set_if_absent(key: &str, value: Option<String>) {
        let Some(value) = value else {
            return;
        };
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
            tracing::trace!(
                target: "gitmentor::config",
                key,
                "Set environment variable from config file"
            );
        }
    }

    let github = &config.github;
    set_if_absent("GITHUB_TOKEN", github.token.clone());
    set_if_absent("GITMENTOR_GITHUB_API_URL", github.api_url.clone());
    set_if_absent(
        "GITMENTOR_GITHUB_TIMEOUT_MS",
        github.timeout_ms.map(|ms| ms.to_string()),
    );

    let mentor = &config.mentor;
    set_if_absent("GEMINI_API_KEY", mentor.api_key.clone());
    set_if_absent("GITMENTOR_GEMINI_BASE_URL", mentor.base_url.clone());
    set_if_absent("GITMENTOR_GEMINI_MODEL", mentor.model.clone());
    set_if_absent(
        "GITMENTOR_GEMINI_TIMEOUT_MS",
        mentor.timeout_ms.map(|ms| ms.to_string()),
    );
    set_if_absent(
        "GITMENTOR_RESPONSE_LANGUAGE",
        mentor.response_language.clone(),
    );
}

/// Resolve collector settings from env (already merged with the file) and CLI.
pub fn collector_config(file: Option<&Config>, args: &GithubArgs) -> CollectorConfig {
    let mut config = CollectorConfig::from_env();
    if let Some(github) = file.map(|c| &c.github) {
        if let Some(per_page) = github.per_page {
            config.per_page = per_page;
        }
        if let Some(max_pages) = github.max_pages {
            config.max_pages = max_pages;
        }
        if let Some(concurrency) = github.concurrency {
            config.concurrency = concurrency;
        }
    }
    if let Some(token) = &args.github_token {
        config = config.with_token(Some(token.clone()));
    }
    if let Some(max_pages) = args.max_pages {
        config.max_pages = max_pages;
    }
    config
}

/// Resolve mentor settings; fails when no API key is configured anywhere.
pub fn mentor_config(language: Option<String>) -> Result<MentorConfig, MentorError> {
    let config = MentorConfig::from_env()?;
    Ok(match language.filter(|l| !l.trim().is_empty()) {
        Some(language) => config.with_response_language(Some(language)),
        None => config,
    })
}
