use std::collections::BTreeSet;

use rae_core::{Case, ErrorInfo, RaeError, SamplingConfig};
use serde::{Deserialize, Serialize};

use crate::criteria::SampleCriteria;
use crate::methodology::methodology_with_criteria;
use crate::selection::{SampleMethod, SelectedCase};
use crate::strategies::{extreme_deviant, maximum_variation, purposive_sampling, typical_cases};

/// A sample request as received from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleRequest {
    /// Strategy to run.
    pub method: SampleMethod,
    /// Number of cases wanted.
    pub count: usize,
    /// Context filters applied before the strategy.
    #[serde(default)]
    pub criteria: SampleCriteria,
    /// Domains spanning the profile space. Empty means every scored domain.
    #[serde(default)]
    pub domain_keys: Vec<String>,
}

impl SampleRequest {
    /// Creates a request with no criteria over every scored domain.
    pub fn new(method: SampleMethod, count: usize) -> Self {
        Self {
            method,
            count,
            criteria: SampleCriteria::default(),
            domain_keys: Vec::new(),
        }
    }

    /// Rejects counts outside the configured bounds.
    pub fn validate(&self, limits: &SamplingConfig) -> Result<(), RaeError> {
        if self.count < limits.min_count || self.count > limits.max_count {
            return Err(RaeError::Validation(
                ErrorInfo::new("sample.count_out_of_range", "sample count out of range")
                    .with_context("count", self.count.to_string())
                    .with_context("min", limits.min_count.to_string())
                    .with_context("max", limits.max_count.to_string())
                    .with_hint(format!(
                        "request between {} and {} cases",
                        limits.min_count, limits.max_count
                    )),
            ));
        }
        if self.method == SampleMethod::Purposive && self.criteria.is_empty() {
            tracing::warn!("purposive sample requested without criteria; every case matches");
        }
        Ok(())
    }
}

/// Selected cases plus the text describing how they were chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleResult {
    /// Strategy that ran.
    pub method: SampleMethod,
    /// Count asked for.
    pub requested_count: usize,
    /// Cases left after the criteria filter.
    pub pool_size: usize,
    /// Chosen cases in selection order.
    pub selected: Vec<SelectedCase>,
    /// Methods-section sentence.
    pub methodology: String,
}

/// Validates the request, narrows the pool by criteria and runs the strategy.
pub fn draw_sample(
    request: &SampleRequest,
    cases: &[Case],
    limits: &SamplingConfig,
) -> Result<SampleResult, RaeError> {
    request.validate(limits)?;
    let pool: Vec<Case> = request
        .criteria
        .filter(cases)
        .into_iter()
        .cloned()
        .collect();
    let domain_keys = if request.domain_keys.is_empty() {
        scored_domains(&pool)
    } else {
        request.domain_keys.clone()
    };

    let unplaced = pool
        .iter()
        .filter(|case| !case.has_any_domain(&domain_keys))
        .count();
    if unplaced > 0
        && matches!(
            request.method,
            SampleMethod::MaximumVariation | SampleMethod::Typical
        )
    {
        tracing::warn!(
            unplaced,
            method = %request.method,
            "cases without domain scores are not eligible"
        );
    }

    let selected = match request.method {
        SampleMethod::MaximumVariation => maximum_variation(&pool, request.count, &domain_keys),
        SampleMethod::ExtremeDeviant => extreme_deviant(&pool, request.count),
        SampleMethod::Typical => typical_cases(&pool, request.count, &domain_keys),
        SampleMethod::Purposive => {
            purposive_sampling(&pool, request.count, &request.criteria, cases)
        }
    };
    let methodology = methodology_with_criteria(
        request.method,
        selected.len(),
        pool.len(),
        &request.criteria,
    );
    tracing::debug!(
        method = %request.method,
        pool = pool.len(),
        selected = selected.len(),
        "sample drawn"
    );
    Ok(SampleResult {
        method: request.method,
        requested_count: request.count,
        pool_size: pool.len(),
        selected,
        methodology,
    })
}

fn scored_domains(cases: &[Case]) -> Vec<String> {
    cases
        .iter()
        .flat_map(|case| case.domain_scores.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
