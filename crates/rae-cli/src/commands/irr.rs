use std::path::PathBuf;

use clap::Args;
use rae_core::RaeError;
use rae_irr::compare_coders;

use crate::input::load_assignments;
use crate::output::{provenance, write_artifacts};

#[derive(Args, Debug)]
pub struct IrrArgs {
    /// JSON array of coding assignments.
    #[arg(long)]
    pub assignments: PathBuf,
    /// First coder or coding layer.
    #[arg(long)]
    pub coder_a: String,
    /// Second coder or coding layer.
    #[arg(long)]
    pub coder_b: String,
    /// Output directory for the report and provenance.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &IrrArgs) -> Result<PathBuf, RaeError> {
    let input = load_assignments(&args.assignments)?;
    let result = compare_coders(&input.records, &args.coder_a, &args.coder_b);
    tracing::debug!(
        coder_a = %args.coder_a,
        coder_b = %args.coder_b,
        kappa = result.overall_kappa,
        "agreement computed"
    );
    let stamp = provenance(&input.input_hash, "irr");
    write_artifacts(&args.out, "irr_report.json", &result, &stamp)
}
