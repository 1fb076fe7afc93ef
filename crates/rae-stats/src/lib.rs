#![deny(missing_docs)]
#![doc = "Descriptive statistics, correlation and histograms over assessment populations."]

/// Pairwise-complete Pearson correlation.
pub mod correlation;
/// Mean, median, dispersion and range.
pub mod descriptive;
/// Fixed-range histograms.
pub mod histogram;
/// Combined population summary.
pub mod overview;
/// Score populations drawn from cases.
pub mod population;

pub use correlation::{correlation_matrix, pearson, CorrelationMatrix, ScoreRow};
pub use descriptive::{descriptive, descriptive_with_precision, mean, DescriptiveStats};
pub use histogram::{histogram, HistogramBin, DEFAULT_BIN_COUNT};
pub use overview::{population_overview, DistributionSummary, OverviewOpts, PopulationOverview};
pub use population::{score_rows, ScoreField, ScorePopulation};
