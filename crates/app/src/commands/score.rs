use anyhow::{Context, Result};
use gitmentor_collector::GitHubCollector;
use gitmentor_scoring::analyze_detailed;
use tokio::runtime::Runtime;

use super::print_report;
use crate::cli::ScoreArgs;
use crate::config::{collector_config, Config};
use crate::pipeline::{collect_and_score, read_snapshot, Report};

/// Handle the `score` command.
pub(crate) fn handle_score_command(args: ScoreArgs, file: Option<&Config>) -> Result<()> {
    let report = match (&args.snapshot, &args.username) {
        (Some(path), _) => {
            let snapshot = read_snapshot(path)?;
            Report::from_details(None, analyze_detailed(&snapshot))
        }
        (None, Some(username)) => {
            let collector = GitHubCollector::new(collector_config(file, &args.github))
                .context("configuring GitHub collector")?;
            let rt = Runtime::new()?;
            let (_, details) = rt.block_on(collect_and_score(&collector, username))?;
            Report::from_details(Some(username.clone()), details)
        }
        (None, None) => anyhow::bail!("either a username or --snapshot is required"),
    };
    print_report(&report, args.format, args.explain)
}
