use rae_core::Case;

use crate::selection::{SelectedCase, SelectionRationale};

/// The `ceil(count / 2)` lowest and `floor(count / 2)` highest scoring cases.
///
/// Cases are ranked by [`Case::effective_overall`]; cases without any score
/// cannot be ranked and are skipped. Lows come first in ascending order,
/// then highs in descending order.
pub fn extreme_deviant(cases: &[Case], count: usize) -> Vec<SelectedCase> {
    let ranked: Vec<(usize, f64)> = cases
        .iter()
        .enumerate()
        .filter_map(|(idx, case)| Some((idx, case.effective_overall()?)))
        .collect();
    let target = count.min(ranked.len());
    let low_count = target.div_ceil(2);
    let high_count = target / 2;

    // sort_by is stable, so equal scores keep input order at both tails
    let mut ascending = ranked.clone();
    ascending.sort_by(|a, b| a.1.total_cmp(&b.1));
    let lows: Vec<(usize, f64)> = ascending.into_iter().take(low_count).collect();

    let mut descending = ranked;
    descending.sort_by(|a, b| b.1.total_cmp(&a.1));
    let highs: Vec<(usize, f64)> = descending
        .into_iter()
        .filter(|(idx, _)| !lows.iter().any(|(low, _)| low == idx))
        .take(high_count)
        .collect();

    tracing::debug!(lows = lows.len(), highs = highs.len(), "extreme cases drawn");
    lows.into_iter()
        .map(|(idx, score)| {
            SelectedCase::new(&cases[idx], SelectionRationale::LowExtreme { score })
        })
        .chain(highs.into_iter().map(|(idx, score)| {
            SelectedCase::new(&cases[idx], SelectionRationale::HighExtreme { score })
        }))
        .collect()
}
