use std::path::PathBuf;

use clap::Args;
use rae_core::{EngineConfig, RaeError};
use rae_sample::{draw_sample, SampleCriteria, SampleMethod, SampleRequest};

use crate::input::load_cases;
use crate::output::{provenance, write_artifacts};

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Case file (JSON array or CSV table).
    #[arg(long)]
    pub cases: PathBuf,
    /// Output directory for the report and provenance.
    #[arg(long)]
    pub out: PathBuf,
    /// Strategy: maximum-variation, extreme-deviant, typical or purposive.
    #[arg(long)]
    pub method: SampleMethod,
    /// Number of cases to select.
    #[arg(long)]
    pub count: usize,
    /// Keep only cases from this country.
    #[arg(long)]
    pub country: Option<String>,
    /// Keep only cases from this sector.
    #[arg(long)]
    pub sector: Option<String>,
    /// Keep only cases of this size band.
    #[arg(long)]
    pub size: Option<String>,
    /// Domain spanning the profile space; repeat for several.
    #[arg(long = "domain")]
    pub domains: Vec<String>,
}

impl SampleArgs {
    fn request(&self) -> SampleRequest {
        SampleRequest {
            method: self.method,
            count: self.count,
            criteria: SampleCriteria {
                country: self.country.clone(),
                sector: self.sector.clone(),
                size: self.size.clone(),
            },
            domain_keys: self.domains.clone(),
        }
    }
}

pub fn run(args: &SampleArgs, config: &EngineConfig) -> Result<PathBuf, RaeError> {
    let input = load_cases(&args.cases)?;
    let result = draw_sample(&args.request(), &input.records, &config.sampling)?;
    let stamp = provenance(&input.input_hash, &format!("sample:{}", args.method));
    write_artifacts(&args.out, "sample_report.json", &result, &stamp)
}
