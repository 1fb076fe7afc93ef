use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{irr::IrrArgs, sample::SampleArgs, stats::StatsArgs};

#[derive(Parser, Debug)]
#[command(name = "rae", about = "Research analytics engine CLI")]
pub struct Cli {
    /// YAML engine configuration overriding the built-in defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Log engine diagnostics at debug level.
    #[arg(long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Descriptive statistics, histograms and correlations for a case population.
    Stats(StatsArgs),
    /// Select cases for follow-up research with a purposive strategy.
    Sample(SampleArgs),
    /// Inter-rater reliability between two coders.
    Irr(IrrArgs),
}
