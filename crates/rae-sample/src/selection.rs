use std::fmt;
use std::str::FromStr;

use rae_core::{Case, ErrorInfo, RaeError};
use serde::{Deserialize, Serialize};

/// Named purposive sampling strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SampleMethod {
    /// Farthest-point spread across the domain-score space.
    MaximumVariation,
    /// Lowest and highest overall scores.
    ExtremeDeviant,
    /// Closest to the population mean profile.
    Typical,
    /// Exact match on context criteria.
    Purposive,
}

impl SampleMethod {
    /// Every strategy, in declaration order.
    pub const ALL: [SampleMethod; 4] = [
        SampleMethod::MaximumVariation,
        SampleMethod::ExtremeDeviant,
        SampleMethod::Typical,
        SampleMethod::Purposive,
    ];

    /// Stable wire name of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleMethod::MaximumVariation => "maximum-variation",
            SampleMethod::ExtremeDeviant => "extreme-deviant",
            SampleMethod::Typical => "typical",
            SampleMethod::Purposive => "purposive",
        }
    }
}

impl fmt::Display for SampleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleMethod {
    type Err = RaeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SampleMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == value)
            .ok_or_else(|| {
                RaeError::Validation(
                    ErrorInfo::new("sample.unknown_method", "unknown sampling method")
                        .with_context("method", value)
                        .with_hint(
                            "expected maximum-variation, extreme-deviant, typical or purposive",
                        ),
                )
            })
    }
}

/// Why a case was picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SelectionRationale {
    /// One of the two mutually farthest cases.
    Seed {
        /// Distance between the two seeds.
        distance: f64,
    },
    /// Added for having the largest distance to its nearest selected case.
    FarthestPoint {
        /// Distance to the nearest already-selected case.
        #[serde(rename = "minDistance")]
        min_distance: f64,
    },
    /// Among the lowest overall scores.
    LowExtreme {
        /// Overall score used for ranking.
        score: f64,
    },
    /// Among the highest overall scores.
    HighExtreme {
        /// Overall score used for ranking.
        score: f64,
    },
    /// Close to the population mean profile.
    Typical {
        /// Distance to the mean profile.
        distance: f64,
    },
    /// Matched every context criterion.
    CriteriaMatch,
}

/// A selected case together with its selection rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCase {
    /// The case snapshot as supplied.
    pub case: Case,
    /// Why it was selected.
    pub rationale: SelectionRationale,
}

impl SelectedCase {
    /// Pairs a case with its rationale.
    pub fn new(case: &Case, rationale: SelectionRationale) -> Self {
        Self {
            case: case.clone(),
            rationale,
        }
    }

    /// Identifier of the selected case.
    pub fn case_id(&self) -> &str {
        &self.case.case_id
    }
}
