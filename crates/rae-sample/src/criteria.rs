use rae_core::{Case, CaseContext};
use serde::{Deserialize, Serialize};

/// Optional equality filters on case context. Absent fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleCriteria {
    /// Required country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Required sector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// Required size band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl SampleCriteria {
    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.sector.is_none() && self.size.is_none()
    }

    /// Exact, case-sensitive match of every set field against `context`.
    pub fn matches(&self, context: &CaseContext) -> bool {
        field_matches(&self.country, &context.country)
            && field_matches(&self.sector, &context.sector)
            && field_matches(&self.size, &context.size)
    }

    /// Cases whose own context satisfies the criteria, in input order.
    pub fn filter<'a>(&self, cases: &'a [Case]) -> Vec<&'a Case> {
        cases
            .iter()
            .filter(|case| self.matches(&case.context))
            .collect()
    }

    /// Set fields as `(name, value)` pairs in a fixed order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("country", self.country.as_deref()),
            ("sector", self.sector.as_deref()),
            ("size", self.size.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| Some((name, value?)))
        .collect()
    }
}

fn field_matches(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual.as_deref() == Some(wanted.as_str()),
    }
}
