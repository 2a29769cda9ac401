//! CLI integration tests for the `gitmentor` binary.
//!
//! Each test runs the built executable with HOME pointed at a tempdir so no
//! user configuration leaks in.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result};

fn gitmentor(home: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_gitmentor"))
        .args(args)
        .env("HOME", home)
        .env_remove("GITMENTOR_CONFIG")
        .env_remove("GEMINI_API_KEY")
        .env_remove("GITHUB_TOKEN")
        .output()
        .with_context(|| format!("failed to execute gitmentor {args:?}"))?;

    if cfg!(debug_assertions) {
        eprintln!("stdout:\n{}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr:\n{}", String::from_utf8_lossy(&output.stderr));
    }
    Ok(output)
}

const SNAPSHOT: &str = r#"{
    "languages": {"Python": 8, "Go": 2},
    "repositories": [{"name": "api", "size": 300, "open_issue_count": 0, "has_readme": true, "has_tests": false}],
    "weekly_commit_activity": [0, 0, 0, 0, 5, 5, 5, 5, 10, 10, 10, 10]
}"#;

#[test]
fn given_home_when_config_path_then_prints_gitmentor_config_file() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let output = gitmentor(tmp.path(), &["config-path"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = tmp.path().join(".gitmentor").join("config.toml");
    assert_eq!(stdout.trim(), expected.display().to_string());
    Ok(())
}

#[test]
fn given_snapshot_when_score_json_then_reports_analysis_only() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let snapshot = tmp.path().join("octocat.json");
    fs::write(&snapshot, SNAPSHOT)?;

    let output = gitmentor(
        tmp.path(),
        &["score", "--snapshot", snapshot.to_str().unwrap(), "--format", "json"],
    )?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["analysis"]["final_score"], 6.16);
    assert_eq!(value["analysis"]["final_skill_level"], "Intermediate");
    assert_eq!(value["analysis"]["main_languages"][0]["name"], "Python");
    assert!(value.get("feedback").is_none());
    assert!(value.get("breakdown").is_none());
    Ok(())
}

#[test]
fn given_snapshot_when_score_explain_then_prints_factors() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let snapshot = tmp.path().join("octocat.json");
    fs::write(&snapshot, SNAPSHOT)?;

    let output = gitmentor(
        tmp.path(),
        &["score", "--snapshot", snapshot.to_str().unwrap(), "--explain"],
    )?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Skill level: Intermediate (6.16 / 10)"));
    assert!(stdout.contains("Score factors:"));
    assert!(stdout.contains("api: large, readme"));
    Ok(())
}

#[test]
fn given_no_gemini_key_when_roadmap_then_fails_with_hint() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let output = gitmentor(tmp.path(), &["roadmap", "--goal", "Backend Python"])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GEMINI_API_KEY"), "stderr was: {stderr}");
    Ok(())
}

#[test]
fn given_broken_config_when_score_then_reports_parse_error() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let config_dir = tmp.path().join(".gitmentor");
    fs::create_dir_all(&config_dir)?;
    fs::write(config_dir.join("config.toml"), "[github\n")?;
    let snapshot = tmp.path().join("octocat.json");
    fs::write(&snapshot, SNAPSHOT)?;

    let output = gitmentor(
        tmp.path(),
        &["score", "--snapshot", snapshot.to_str().unwrap()],
    )?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse config file"), "stderr was: {stderr}");
    Ok(())
}
