//! Assessment and coding records handed to the engines by the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, RaeError};

/// Lower bound of the assessment scale.
pub const SCORE_MIN: f64 = 0.0;
/// Upper bound of the assessment scale.
pub const SCORE_MAX: f64 = 5.0;

/// Free-form descriptive attributes of the assessed organisation.
///
/// Only criterion sampling reads these; statistics never do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseContext {
    /// Country of operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Sector label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// Organisation size band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// One completed assessment snapshot.
///
/// A missing domain score is absent from `domain_scores`; it is never a zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// Opaque identifier of the case.
    pub case_id: String,
    /// Overall score on the 0 to 5 scale, if any domain was scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
    /// Scores keyed by domain.
    #[serde(default)]
    pub domain_scores: BTreeMap<String, f64>,
    /// Descriptive attributes used by criterion sampling.
    #[serde(default)]
    pub context: CaseContext,
}

impl Case {
    /// Creates a case with no scores and an empty context.
    pub fn new(case_id: impl Into<String>) -> Self {
        Self {
            case_id: case_id.into(),
            overall_score: None,
            domain_scores: BTreeMap::new(),
            context: CaseContext::default(),
        }
    }

    /// Sets the overall score.
    pub fn with_overall(mut self, score: f64) -> Self {
        self.overall_score = Some(score);
        self
    }

    /// Records a domain score.
    pub fn with_domain(mut self, key: impl Into<String>, score: f64) -> Self {
        self.domain_scores.insert(key.into(), score);
        self
    }

    /// Replaces the descriptive context.
    pub fn with_context(mut self, context: CaseContext) -> Self {
        self.context = context;
        self
    }

    /// Returns the score recorded for `key`, if present.
    pub fn domain_score(&self, key: &str) -> Option<f64> {
        self.domain_scores.get(key).copied()
    }

    /// Returns true when at least one of `keys` is scored.
    pub fn has_any_domain(&self, keys: &[String]) -> bool {
        keys.iter().any(|key| self.domain_scores.contains_key(key))
    }

    /// Recorded overall score, else the mean of the present domain scores.
    pub fn effective_overall(&self) -> Option<f64> {
        if let Some(score) = self.overall_score {
            return Some(score);
        }
        if self.domain_scores.is_empty() {
            return None;
        }
        let sum: f64 = self.domain_scores.values().sum();
        Some(sum / self.domain_scores.len() as f64)
    }

    /// Checks that every score is finite and within the assessment scale.
    pub fn validate(&self) -> Result<(), RaeError> {
        if self.case_id.trim().is_empty() {
            return Err(RaeError::Input(
                ErrorInfo::new("case.missing_id", "case identifier must not be empty")
                    .with_hint("every record needs a caseId"),
            ));
        }
        if let Some(score) = self.overall_score {
            check_score(&self.case_id, "overall", score)?;
        }
        for (key, score) in &self.domain_scores {
            check_score(&self.case_id, key, *score)?;
        }
        Ok(())
    }
}

fn check_score(case_id: &str, field: &str, score: f64) -> Result<(), RaeError> {
    if score.is_finite() && (SCORE_MIN..=SCORE_MAX).contains(&score) {
        return Ok(());
    }
    Err(RaeError::Input(
        ErrorInfo::new("case.score_out_of_range", "score outside the 0-5 scale")
            .with_context("caseId", case_id)
            .with_context("field", field)
            .with_context("value", score.to_string()),
    ))
}

/// Validates every case in order, stopping at the first failure.
pub fn validate_cases(cases: &[Case]) -> Result<(), RaeError> {
    cases.iter().try_for_each(Case::validate)
}

/// One application of a qualitative code to a text unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodingAssignment {
    /// Identifier of the coded response.
    pub response_id: String,
    /// Coder or coding layer identifier.
    pub coder_id: String,
    /// Label applied to the response.
    pub tag_name: String,
}

impl CodingAssignment {
    /// Creates a new assignment record.
    pub fn new(
        response_id: impl Into<String>,
        coder_id: impl Into<String>,
        tag_name: impl Into<String>,
    ) -> Self {
        Self {
            response_id: response_id.into(),
            coder_id: coder_id.into(),
            tag_name: tag_name.into(),
        }
    }
}
