//! Application layer for the `gitmentor` command-line tool.
//!
//! Wires the GitHub collector, the scoring engine and the Gemini narrative
//! generator together behind a `clap` interface. The entry point is [`run`];
//! [`pipeline`] and [`render`] are public so the orchestration can be driven
//! with other [`gitmentor_collector::ProfileSource`] and
//! [`gitmentor_mentor::NarrativeGenerator`] implementations.
//!
//! Configuration is read from `~/.gitmentor/config.toml` (see [`config`]),
//! overridden by environment variables and then by command-line flags.

#![deny(unsafe_code)]

mod app;
pub mod cli;
mod commands;
pub mod config;
pub mod pipeline;
pub mod render;

pub use app::run;
