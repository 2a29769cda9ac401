//! Shared test utilities for gitmentor crates.
//!
//! This crate provides environment-variable guards, a temporary home
//! directory fixture, and JSON payload builders shaped like the GitHub and
//! Gemini responses the collaborator crates consume.

use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialize tests that mutate process-global state (env vars, HOME).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = gitmentor_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value" until _guard drops
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// Temporary home directory with a `.gitmentor` folder.
///
/// The tempdir is removed when this struct is dropped.
pub struct TestFixture {
    pub tempdir: tempfile::TempDir,
    /// Path to `$HOME/.gitmentor`.
    pub config_dir: PathBuf,
}

impl TestFixture {
    /// Create `$HOME/.gitmentor/` inside a fresh tempdir.
    ///
    /// Does NOT set HOME - use `home_guard()` for that.
    pub fn new() -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let config_dir = tempdir.path().join(".gitmentor");
        std::fs::create_dir_all(&config_dir)?;
        Ok(Self {
            tempdir,
            config_dir,
        })
    }

    /// Get the path that should be set as HOME.
    pub fn home_path(&self) -> &std::path::Path {
        self.tempdir.path()
    }

    /// Create an RAII guard that sets HOME to this fixture's temp directory.
    pub fn home_guard(&self) -> EnvVarGuard {
        set_env_var("HOME", Some(&*self.home_path().to_string_lossy()))
    }

    /// Write `config.toml` into the fixture's config directory.
    pub fn write_config(&self, content: &str) -> std::io::Result<PathBuf> {
        let path = self.config_dir.join("config.toml");
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Write an arbitrary file relative to the tempdir root.
    pub fn write_file(&self, relative: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.tempdir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }
}

/// One entry of a `GET /users/{user}/repos` response.
pub fn repo_json(
    name: &str,
    language: Option<&str>,
    size: u64,
    open_issues: u64,
    has_downloads: bool,
) -> Value {
    json!({
        "name": name,
        "full_name": format!("octocat/{name}"),
        "language": language,
        "size": size,
        "open_issues_count": open_issues,
        "has_downloads": has_downloads,
        "fork": false,
    })
}

/// A `GET /repos/{owner}/{repo}/stats/commit_activity` response.
pub fn commit_activity_json(totals: &[u64]) -> Value {
    let weeks: Vec<Value> = totals
        .iter()
        .enumerate()
        .map(|(i, total)| {
            json!({
                "total": total,
                "week": 1_700_000_000u64 + i as u64 * 604_800,
                "days": [0, 0, 0, 0, 0, 0, 0],
            })
        })
        .collect();
    Value::Array(weeks)
}

/// A Gemini `generateContent` reply whose single text part is `text`.
pub fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            },
            "finishReason": "STOP"
        }]
    })
}
