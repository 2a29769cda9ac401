use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::{handle_analyze_command, handle_roadmap_command, handle_score_command};
use crate::config::{apply_config_to_env, config_path, load_config};

/// Parse the command line and run the selected command.
///
/// Logs go to stderr, filtered by `RUST_LOG`, so `--format json` output on
/// stdout stays machine-readable.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::ConfigPath = cli.command {
        let path = config_path().context("could not determine the home directory")?;
        println!("{}", path.display());
        return Ok(());
    }

    let file_config = load_config()?;
    if let Some(config) = &file_config {
        apply_config_to_env(config);
    }

    match cli.command {
        Commands::Analyze(args) => handle_analyze_command(args, file_config.as_ref()),
        Commands::Score(args) => handle_score_command(args, file_config.as_ref()),
        Commands::Roadmap(args) => handle_roadmap_command(args),
        Commands::ConfigPath => Ok(()),
    }
}
