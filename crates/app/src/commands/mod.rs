//! CLI command handlers for the gitmentor application.

mod analyze;
mod roadmap;
mod score;

pub(crate) use analyze::handle_analyze_command;
pub(crate) use roadmap::handle_roadmap_command;
pub(crate) use score::handle_score_command;

use anyhow::Result;

use crate::cli::OutputFormat;
use crate::pipeline::Report;
use crate::render::{report_json, report_text};

pub(crate) fn print_report(report: &Report, format: OutputFormat, explain: bool) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", report_json(report, explain)?),
        OutputFormat::Text => println!("{}", report_text(report, explain)),
    }
    Ok(())
}
