use std::collections::HashMap;

use rae_core::{Case, CaseContext};

use crate::criteria::SampleCriteria;
use crate::selection::{SelectedCase, SelectionRationale};

/// Up to `count` cases whose full-record context meets `criteria`.
///
/// Context is looked up in `full_cases` by id, so `cases` may be a
/// score-only projection. Cases absent from `full_cases` never match.
/// Input order is kept. No match is an empty result, not an error.
pub fn purposive_sampling(
    cases: &[Case],
    count: usize,
    criteria: &SampleCriteria,
    full_cases: &[Case],
) -> Vec<SelectedCase> {
    let contexts: HashMap<&str, &CaseContext> = full_cases
        .iter()
        .map(|case| (case.case_id.as_str(), &case.context))
        .collect();
    let selected: Vec<SelectedCase> = cases
        .iter()
        .filter(|case| {
            contexts
                .get(case.case_id.as_str())
                .is_some_and(|context| criteria.matches(context))
        })
        .take(count)
        .map(|case| SelectedCase::new(case, SelectionRationale::CriteriaMatch))
        .collect();
    tracing::debug!(selected = selected.len(), "criterion sample drawn");
    selected
}
