use itertools::Itertools;
use rae_core::Case;

use crate::distance::profile_distance;
use crate::selection::{SelectedCase, SelectionRationale};

/// Greedy farthest-point selection across the domain-score space.
///
/// The two mutually farthest cases seed the sample, then the case whose
/// nearest selected neighbour is farthest away is added until `count` is
/// reached. This is the max-min heuristic, an approximation of the optimal
/// diverse subset. Pairs sharing no scored domain count as distance 0, and
/// cases with none of `domain_keys` scored are not eligible.
pub fn maximum_variation(
    cases: &[Case],
    count: usize,
    domain_keys: &[String],
) -> Vec<SelectedCase> {
    let pool: Vec<&Case> = cases
        .iter()
        .filter(|case| case.has_any_domain(domain_keys))
        .collect();
    let target = count.min(pool.len());
    if target == 0 {
        return Vec::new();
    }
    if pool.len() == 1 {
        return vec![SelectedCase::new(
            pool[0],
            SelectionRationale::Seed { distance: 0.0 },
        )];
    }

    let distances: Vec<Vec<f64>> = pool
        .iter()
        .map(|a| {
            pool.iter()
                .map(|b| {
                    profile_distance(&a.domain_scores, &b.domain_scores, domain_keys)
                        .unwrap_or(0.0)
                })
                .collect()
        })
        .collect();

    let mut seeds = (0, 1, distances[0][1]);
    for (i, j) in (0..pool.len()).tuple_combinations() {
        if distances[i][j] > seeds.2 {
            seeds = (i, j, distances[i][j]);
        }
    }
    let (first, second, spread) = seeds;

    let mut chosen = vec![first];
    let mut selected = vec![SelectedCase::new(
        pool[first],
        SelectionRationale::Seed { distance: spread },
    )];
    if target >= 2 {
        chosen.push(second);
        selected.push(SelectedCase::new(
            pool[second],
            SelectionRationale::Seed { distance: spread },
        ));
    }

    while chosen.len() < target {
        let mut best: Option<(usize, f64)> = None;
        for idx in (0..pool.len()).filter(|idx| !chosen.contains(idx)) {
            let nearest = chosen
                .iter()
                .map(|&picked| distances[idx][picked])
                .fold(f64::INFINITY, f64::min);
            if best.map_or(true, |(_, current)| nearest > current) {
                best = Some((idx, nearest));
            }
        }
        let Some((idx, nearest)) = best else {
            break;
        };
        chosen.push(idx);
        selected.push(SelectedCase::new(
            pool[idx],
            SelectionRationale::FarthestPoint {
                min_distance: nearest,
            },
        ));
    }
    tracing::debug!(
        pool = pool.len(),
        selected = selected.len(),
        "maximum variation sample drawn"
    );
    selected
}
