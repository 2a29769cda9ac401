use anyhow::{Context, Result};
use gitmentor_collector::GitHubCollector;
use gitmentor_mentor::GeminiGenerator;
use tokio::runtime::Runtime;

use super::print_report;
use crate::cli::AnalyzeArgs;
use crate::config::{collector_config, mentor_config, Config};
use crate::pipeline::{ensure_goal, run_pipeline};

/// Handle the `analyze` command.
pub(crate) fn handle_analyze_command(args: AnalyzeArgs, file: Option<&Config>) -> Result<()> {
    let collector = GitHubCollector::new(collector_config(file, &args.github))
        .context("configuring GitHub collector")?;

    let generator = if args.no_narrative {
        None
    } else {
        ensure_goal(args.goal.as_deref().unwrap_or_default())?;
        let config = mentor_config(args.language.clone())?;
        Some(GeminiGenerator::new(config).context("configuring Gemini client")?)
    };

    let rt = Runtime::new()?;
    let (_, report) = rt.block_on(run_pipeline(
        &collector,
        generator.as_ref(),
        &args.username,
        args.goal.as_deref(),
        args.snapshot_out.as_deref(),
    ))?;

    print_report(&report, args.format, false)
}
