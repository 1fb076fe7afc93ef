use rae_core::Case;

use crate::distance::{mean_profile, profile_distance};
use crate::selection::{SelectedCase, SelectionRationale};

/// The `count` cases closest to the population mean profile.
///
/// The mean is taken per domain over the cases that scored it. Cases with
/// none of `domain_keys` scored have no position and are not eligible.
pub fn typical_cases(cases: &[Case], count: usize, domain_keys: &[String]) -> Vec<SelectedCase> {
    let pool: Vec<&Case> = cases
        .iter()
        .filter(|case| case.has_any_domain(domain_keys))
        .collect();
    let centre = mean_profile(pool.iter().map(|case| &case.domain_scores), domain_keys);

    let mut ranked: Vec<(&Case, f64)> = pool
        .into_iter()
        .filter_map(|case| {
            let distance = profile_distance(&case.domain_scores, &centre, domain_keys)?;
            Some((case, distance))
        })
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.truncate(count);

    tracing::debug!(selected = ranked.len(), "typical cases drawn");
    ranked
        .into_iter()
        .map(|(case, distance)| SelectedCase::new(case, SelectionRationale::Typical { distance }))
        .collect()
}
