//! Command-line caller around the statistics, sampling and agreement engines.
//!
//! Every command reads its input file, runs one engine and writes a canonical
//! JSON report with a `provenance.json` beside it.

use std::path::PathBuf;

use rae_core::{EngineConfig, RaeError};

pub mod cli;
pub mod commands;
pub mod input;
pub mod output;
pub mod telemetry;

pub use cli::{Cli, Command};

/// Loads the configuration named by `cli.config`, falling back to defaults.
pub fn load_config(cli: &Cli) -> Result<EngineConfig, RaeError> {
    match &cli.config {
        Some(path) => EngineConfig::load(path),
        None => Ok(EngineConfig::default()),
    }
}

/// Runs the parsed command and returns the path of the written report.
pub fn run(cli: &Cli) -> Result<PathBuf, RaeError> {
    let config = load_config(cli)?;
    match &cli.command {
        Command::Stats(args) => commands::stats::run(args, &config),
        Command::Sample(args) => commands::sample::run(args, &config),
        Command::Irr(args) => commands::irr::run(args),
    }
}
