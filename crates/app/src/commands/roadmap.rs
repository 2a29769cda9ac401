use anyhow::{Context, Result};
use gitmentor_mentor::{GeminiGenerator, NarrativeGenerator};
use tokio::runtime::Runtime;

use crate::cli::{OutputFormat, RoadmapArgs};
use crate::config::mentor_config;
use crate::pipeline::ensure_goal;
use crate::render::{roadmap_json, roadmap_text};

/// Handle the `roadmap` command.
pub(crate) fn handle_roadmap_command(args: RoadmapArgs) -> Result<()> {
    ensure_goal(&args.goal)?;
    let generator =
        GeminiGenerator::new(mentor_config(args.language)?).context("configuring Gemini client")?;

    let rt = Runtime::new()?;
    let roadmap = rt
        .block_on(generator.generate_roadmap(&args.goal))
        .context("generating learning roadmap")?;

    match args.format {
        OutputFormat::Json => println!("{}", roadmap_json(&roadmap)?),
        OutputFormat::Text => println!("{}", roadmap_text(&roadmap)),
    }
    Ok(())
}
