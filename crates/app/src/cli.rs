use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for reports.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal report.
    #[default]
    Text,
    /// A single JSON document on stdout.
    Json,
}

/// Command-line interface for the `gitmentor` application.
#[derive(Debug, Parser)]
#[command(
    name = "gitmentor",
    version,
    about = "Scores a GitHub profile and generates career feedback and a learning roadmap"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `gitmentor` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Collects a profile, scores it and asks the mentor for feedback and a roadmap.
    Analyze(AnalyzeArgs),
    /// Scores a profile without generating any narrative.
    Score(ScoreArgs),
    /// Generates a learning roadmap for a career goal.
    Roadmap(RoadmapArgs),
    /// Prints the configuration file location.
    ConfigPath,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AnalyzeArgs {
    /// GitHub username to analyze.
    pub username: String,
    /// Career goal the roadmap should target.
    #[arg(long, required_unless_present = "no_narrative")]
    pub goal: Option<String>,
    /// Output format: text or json.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Skip feedback and roadmap generation (no Gemini key needed).
    #[arg(long, default_value_t = false)]
    pub no_narrative: bool,
    /// Also write the collected snapshot to this JSON file.
    #[arg(long, value_name = "FILE")]
    pub snapshot_out: Option<PathBuf>,
    #[command(flatten)]
    pub github: GithubArgs,
    /// Language for the generated narrative (overrides `GITMENTOR_RESPONSE_LANGUAGE`).
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ScoreArgs {
    /// GitHub username to collect and score.
    #[arg(required_unless_present = "snapshot", conflicts_with = "snapshot")]
    pub username: Option<String>,
    /// Score a previously saved snapshot file instead of calling GitHub.
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,
    /// Output format: text or json.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Show the factors behind each sub-score.
    #[arg(long, default_value_t = false)]
    pub explain: bool,
    #[command(flatten)]
    pub github: GithubArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RoadmapArgs {
    /// Career goal, e.g. "Backend Python".
    #[arg(long)]
    pub goal: String,
    /// Output format: text or json.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Language for the generated roadmap.
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,
}

/// GitHub access overrides shared by collecting commands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GithubArgs {
    /// GitHub token (overrides `GITHUB_TOKEN`).
    #[arg(long, value_name = "TOKEN")]
    pub github_token: Option<String>,
    /// Maximum number of repository pages to fetch.
    #[arg(long, value_name = "N")]
    pub max_pages: Option<u32>,
}
