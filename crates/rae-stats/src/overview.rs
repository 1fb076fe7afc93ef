use std::collections::BTreeMap;

use rae_core::Case;
use serde::{Deserialize, Serialize};

use crate::correlation::{correlation_matrix, CorrelationMatrix};
use crate::descriptive::{descriptive_with_precision, DescriptiveStats};
use crate::histogram::{histogram, HistogramBin, DEFAULT_BIN_COUNT};
use crate::population::{score_rows, ScoreField, ScorePopulation};

/// Descriptive statistics and histogram of one score field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSummary {
    /// Descriptive statistics over the present scores.
    pub descriptive: DescriptiveStats,
    /// Fixed-range histogram over the present scores.
    pub histogram: Vec<HistogramBin>,
}

impl DistributionSummary {
    fn of(population: &ScorePopulation, opts: &OverviewOpts) -> Self {
        Self {
            descriptive: descriptive_with_precision(population.values(), opts.std_dev_decimals),
            histogram: histogram(population.values(), opts.bin_count),
        }
    }
}

/// Layout options for [`population_overview`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewOpts {
    /// Number of histogram bins across the scale.
    pub bin_count: usize,
    /// Decimal places kept on standard deviations.
    pub std_dev_decimals: u32,
}

impl Default for OverviewOpts {
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
            std_dev_decimals: 2,
        }
    }
}

/// Dashboard-level statistics for a case population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationOverview {
    /// Number of cases supplied.
    pub case_count: usize,
    /// Distribution of overall scores.
    pub overall: DistributionSummary,
    /// Distribution of each requested domain.
    pub domains: BTreeMap<String, DistributionSummary>,
    /// Pairwise-complete correlations between the requested domains.
    pub correlations: CorrelationMatrix,
}

/// Runs every statistics operation over `cases` for the given domains.
pub fn population_overview(
    cases: &[Case],
    domain_keys: &[String],
    opts: &OverviewOpts,
) -> PopulationOverview {
    let overall = ScorePopulation::from_cases(cases, ScoreField::Overall);
    let domains = domain_keys
        .iter()
        .map(|key| {
            let population = ScorePopulation::from_cases(cases, ScoreField::Domain(key.clone()));
            (key.clone(), DistributionSummary::of(&population, opts))
        })
        .collect();
    let correlations = correlation_matrix(&score_rows(cases, domain_keys), domain_keys);
    PopulationOverview {
        case_count: cases.len(),
        overall: DistributionSummary::of(&overall, opts),
        domains,
        correlations,
    }
}
