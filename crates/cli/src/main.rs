//! Command-line interface for the `gitmentor` application.
//!
//! This crate serves as the main entry point for the executable, delegating
//! its functionality to the `gitmentor-app` crate.

fn main() -> anyhow::Result<()> {
    gitmentor_app::run()
}
