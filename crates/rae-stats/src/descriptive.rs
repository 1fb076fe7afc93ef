use serde::{Deserialize, Serialize};

/// Summary of a list of scores. Every field is zero for an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle value, or the average of the two central values for even `n`.
    pub median: f64,
    /// Population standard deviation, rounded for display.
    pub std_dev: f64,
    /// Smallest score.
    pub min: f64,
    /// Largest score.
    pub max: f64,
    /// Number of scores.
    pub n: usize,
}

const STD_DEV_DECIMALS: u32 = 2;

/// Descriptive statistics with the standard deviation rounded to two places.
pub fn descriptive(scores: &[f64]) -> DescriptiveStats {
    descriptive_with_precision(scores, STD_DEV_DECIMALS)
}

/// Descriptive statistics with the standard deviation rounded to `decimals`.
///
/// The deviation divides by `n`: the observed cases are the whole
/// population, not a draw from a larger one.
pub fn descriptive_with_precision(scores: &[f64], decimals: u32) -> DescriptiveStats {
    let n = scores.len();
    if n == 0 {
        return DescriptiveStats::default();
    }
    let mean = mean(scores);
    let variance = scores
        .iter()
        .map(|score| (score - mean).powi(2))
        .sum::<f64>()
        / n as f64;
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    tracing::debug!(n, mean, "descriptive statistics computed");
    DescriptiveStats {
        mean,
        median: median(scores),
        std_dev: round_to(variance.sqrt(), decimals),
        min,
        max,
        n,
    }
}

/// Arithmetic mean, zero for an empty slice.
pub fn mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

fn median(scores: &[f64]) -> f64 {
    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
