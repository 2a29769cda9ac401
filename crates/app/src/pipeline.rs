//! Orchestration: data source, scoring, then narrative.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use gitmentor_collector::ProfileSource;
use gitmentor_mentor::{NarrativeGenerator, ProfileFeedback, Roadmap};
use gitmentor_scoring::{analyze_detailed, AnalysisResult, DetailedAnalysis, ProfileSnapshot};

/// Everything one run produced, ready for rendering.
#[derive(Debug, Clone)]
pub struct Report {
    pub username: Option<String>,
    pub details: DetailedAnalysis,
    pub feedback: Option<ProfileFeedback>,
    pub roadmap: Option<Roadmap>,
}

impl Report {
    pub fn from_details(username: Option<String>, details: DetailedAnalysis) -> Self {
        Self {
            username,
            details,
            feedback: None,
            roadmap: None,
        }
    }

    pub fn analysis(&self) -> &AnalysisResult {
        &self.details.result
    }
}

/// Collect a profile and score it.
pub async fn collect_and_score<S>(
    source: &S,
    username: &str,
) -> Result<(ProfileSnapshot, DetailedAnalysis)>
where
    S: ProfileSource + ?Sized,
{
    let snapshot = source
        .collect_profile(username)
        .await
        .with_context(|| format!("collecting GitHub profile for '{username}'"))?;
    let details = analyze_detailed(&snapshot);
    tracing::info!(
        username,
        final_score = details.result.final_score.value(),
        level = %details.result.final_skill_level,
        "scored profile"
    );
    Ok((snapshot, details))
}

/// Ask the generator for feedback and a roadmap concurrently.
pub async fn generate_narrative<G>(
    generator: &G,
    analysis: &AnalysisResult,
    goal: &str,
) -> Result<(ProfileFeedback, Roadmap)>
where
    G: NarrativeGenerator + ?Sized,
{
    ensure_goal(goal)?;
    let feedback = async {
        generator
            .analyze_profile(analysis)
            .await
            .context("generating profile feedback")
    };
    let roadmap = async {
        generator
            .generate_roadmap(goal)
            .await
            .context("generating learning roadmap")
    };
    let (feedback, roadmap) = futures::try_join!(feedback, roadmap)?;
    tracing::info!(
        career_paths = feedback.career_paths.len(),
        projects = roadmap.practical_projects.len(),
        "generated narrative"
    );
    Ok((feedback, roadmap))
}

/// Full run: collect, score and, when a generator is given, narrate.
///
/// The snapshot is written to `snapshot_out` before narration starts, so a
/// failing generator does not lose the collected profile.
pub async fn run_pipeline<S, G>(
    source: &S,
    generator: Option<&G>,
    username: &str,
    goal: Option<&str>,
    snapshot_out: Option<&Path>,
) -> Result<(ProfileSnapshot, Report)>
where
    S: ProfileSource + ?Sized,
    G: NarrativeGenerator + ?Sized,
{
    if generator.is_some() {
        ensure_goal(goal.unwrap_or_default())?;
    }

    let (snapshot, details) = collect_and_score(source, username).await?;
    if let Some(path) = snapshot_out {
        write_snapshot(path, &snapshot)?;
    }
    let mut report = Report::from_details(Some(username.to_string()), details);

    if let (Some(generator), Some(goal)) = (generator, goal) {
        let (feedback, roadmap) = generate_narrative(generator, report.analysis(), goal).await?;
        report.feedback = Some(feedback);
        report.roadmap = Some(roadmap);
    }
    Ok((snapshot, report))
}

pub fn ensure_goal(goal: &str) -> Result<()> {
    ensure!(!goal.trim().is_empty(), "please provide a career goal");
    Ok(())
}

/// Read a snapshot previously written with [`write_snapshot`].
pub fn read_snapshot(path: &Path) -> Result<ProfileSnapshot> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parsing snapshot {}", path.display()))
}

pub fn write_snapshot(path: &Path, snapshot: &ProfileSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, json).with_context(|| format!("writing snapshot {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote snapshot");
    Ok(())
}
