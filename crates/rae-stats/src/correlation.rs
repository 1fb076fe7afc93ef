use std::collections::BTreeMap;

use itertools::Itertools;
use rayon::prelude::*;

/// Sparse score row: only the domains a case actually scored.
pub type ScoreRow = BTreeMap<String, f64>;

/// Pearson coefficients keyed by domain, symmetric with a unit diagonal.
pub type CorrelationMatrix = BTreeMap<String, BTreeMap<String, f64>>;

/// Pairwise-complete Pearson correlation between every pair of domains.
///
/// Each cell only uses the rows where both domains are present. A cell with
/// fewer than two paired rows, or with zero variance on either side, is
/// reported as 0. That zero is a floor value for "not computable", not a
/// claim of independence.
pub fn correlation_matrix(rows: &[ScoreRow], domain_keys: &[String]) -> CorrelationMatrix {
    let pairs: Vec<(usize, usize)> = (0..domain_keys.len()).tuple_combinations().collect();
    let cells: Vec<(usize, usize, f64)> = pairs
        .par_iter()
        .map(|&(i, j)| {
            let (xs, ys) = paired_observations(rows, &domain_keys[i], &domain_keys[j]);
            (i, j, pearson(&xs, &ys))
        })
        .collect();

    let mut matrix: CorrelationMatrix = domain_keys
        .iter()
        .map(|key| {
            let mut row = BTreeMap::new();
            row.insert(key.clone(), 1.0);
            (key.clone(), row)
        })
        .collect();
    for (i, j, r) in cells {
        let (a, b) = (&domain_keys[i], &domain_keys[j]);
        if a == b {
            continue;
        }
        if let Some(row) = matrix.get_mut(a) {
            row.insert(b.clone(), r);
        }
        if let Some(row) = matrix.get_mut(b) {
            row.insert(a.clone(), r);
        }
    }
    tracing::debug!(
        rows = rows.len(),
        domains = domain_keys.len(),
        "correlation matrix computed"
    );
    matrix
}

fn paired_observations(rows: &[ScoreRow], a: &str, b: &str) -> (Vec<f64>, Vec<f64>) {
    rows.iter()
        .filter_map(|row| Some((*row.get(a)?, *row.get(b)?)))
        .unzip()
}

/// Pearson's r, or 0 when fewer than two points or either side is constant.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let len = xs.len().min(ys.len());
    if len < 2 {
        return 0.0;
    }
    let mean_x = xs[..len].iter().sum::<f64>() / len as f64;
    let mean_y = ys[..len].iter().sum::<f64>() / len as f64;
    let mut num = 0.0;
    let mut denom_x = 0.0;
    let mut denom_y = 0.0;
    for (x, y) in xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        num += dx * dy;
        denom_x += dx * dx;
        denom_y += dy * dy;
    }
    if denom_x == 0.0 || denom_y == 0.0 {
        return 0.0;
    }
    (num / (denom_x.sqrt() * denom_y.sqrt())).clamp(-1.0, 1.0)
}
