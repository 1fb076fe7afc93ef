use rae_core::{SCORE_MAX, SCORE_MIN};
use serde::{Deserialize, Serialize};

/// One equal-width bin over the assessment scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub bin_start: f64,
    /// Upper edge: exclusive, except for the final bin which is closed.
    pub bin_end: f64,
    /// Number of scores falling in the bin.
    pub count: u64,
}

/// Default number of bins across the scale.
pub const DEFAULT_BIN_COUNT: usize = 5;

/// Bins `scores` over the fixed 0 to 5 range, whatever their own spread.
///
/// A score of exactly 5 lands in the last bin. Empty input still yields the
/// full bin layout with zero counts. A `bin_count` of zero is treated as one.
pub fn histogram(scores: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    let bins = bin_count.max(1);
    let width = (SCORE_MAX - SCORE_MIN) / bins as f64;
    let mut counts = vec![0u64; bins];
    for &score in scores {
        counts[bin_index(score, width, bins)] += 1;
    }
    tracing::debug!(scores = scores.len(), bins, "histogram computed");
    counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            bin_start: edge(idx, width, bins),
            bin_end: edge(idx + 1, width, bins),
            count,
        })
        .collect()
}

fn edge(idx: usize, width: f64, bins: usize) -> f64 {
    if idx >= bins {
        SCORE_MAX
    } else {
        SCORE_MIN + idx as f64 * width
    }
}

// The division only estimates the bin; the reported edges decide it.
fn bin_index(score: f64, width: f64, bins: usize) -> usize {
    let raw = ((score - SCORE_MIN) / width).floor();
    let mut idx = if raw <= 0.0 || raw.is_nan() {
        0
    } else {
        (raw as usize).min(bins - 1)
    };
    while idx + 1 < bins && score >= edge(idx + 1, width, bins) {
        idx += 1;
    }
    while idx > 0 && score < edge(idx, width, bins) {
        idx -= 1;
    }
    idx
}
