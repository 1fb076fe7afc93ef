use std::path::PathBuf;

use clap::Args;
use rae_core::{EngineConfig, ErrorInfo, RaeError, MAX_BIN_COUNT};
use rae_stats::{population_overview, OverviewOpts};

use crate::input::load_cases;
use crate::output::{provenance, write_artifacts};

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Case file (JSON array or CSV table).
    #[arg(long)]
    pub cases: PathBuf,
    /// Output directory for the report and provenance.
    #[arg(long)]
    pub out: PathBuf,
    /// Domain to include; repeat for several. Defaults to the configured domains.
    #[arg(long = "domain")]
    pub domains: Vec<String>,
    /// Histogram bin count overriding the configuration.
    #[arg(long)]
    pub bins: Option<usize>,
}

pub fn run(args: &StatsArgs, config: &EngineConfig) -> Result<PathBuf, RaeError> {
    let bin_count = args.bins.unwrap_or(config.histogram.bin_count);
    if bin_count == 0 || bin_count > MAX_BIN_COUNT {
        return Err(RaeError::Validation(
            ErrorInfo::new("stats.bin_count", "histogram bin count out of range")
                .with_context("bins", bin_count.to_string())
                .with_hint(format!("pass --bins between 1 and {MAX_BIN_COUNT}")),
        ));
    }
    let input = load_cases(&args.cases)?;
    let domains = if args.domains.is_empty() {
        config.domains.clone()
    } else {
        args.domains.clone()
    };
    let opts = OverviewOpts {
        bin_count,
        std_dev_decimals: config.stats.std_dev_decimals,
    };
    let overview = population_overview(&input.records, &domains, &opts);
    let stamp = provenance(&input.input_hash, "stats");
    write_artifacts(&args.out, "stats_report.json", &overview, &stamp)
}
