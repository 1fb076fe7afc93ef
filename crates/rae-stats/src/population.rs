use rae_core::Case;
use serde::{Deserialize, Serialize};

use crate::correlation::ScoreRow;

/// Which score of a case a population is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "key", rename_all = "kebab-case")]
pub enum ScoreField {
    /// The recorded overall score.
    Overall,
    /// A single domain score.
    Domain(String),
}

/// Ordered scores of one field across a set of cases.
///
/// Cases lacking the field are dropped, never zero-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorePopulation {
    field: ScoreField,
    values: Vec<f64>,
}

impl ScorePopulation {
    /// Collects `field` from `cases`, preserving case order.
    pub fn from_cases(cases: &[Case], field: ScoreField) -> Self {
        let values = cases
            .iter()
            .filter_map(|case| match &field {
                ScoreField::Overall => case.overall_score,
                ScoreField::Domain(key) => case.domain_score(key),
            })
            .collect();
        Self { field, values }
    }

    /// Field the population was built from.
    pub fn field(&self) -> &ScoreField {
        &self.field
    }

    /// Present scores in case order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of cases that carried the field.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no case carried the field.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Projects cases to sparse rows restricted to `domain_keys`.
pub fn score_rows(cases: &[Case], domain_keys: &[String]) -> Vec<ScoreRow> {
    cases
        .iter()
        .map(|case| {
            domain_keys
                .iter()
                .filter_map(|key| Some((key.clone(), case.domain_score(key)?)))
                .collect()
        })
        .collect()
}
