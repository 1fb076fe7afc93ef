use serde::{Deserialize, Serialize};

/// 2x2 agreement table for one tag over the shared responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContingencyTable {
    /// Both coders applied the tag.
    pub both_applied: u64,
    /// Only coder A applied the tag.
    pub a_only: u64,
    /// Only coder B applied the tag.
    pub b_only: u64,
    /// Neither coder applied the tag.
    pub neither: u64,
}

impl ContingencyTable {
    /// Adds one response to the table.
    pub fn record(&mut self, applied_a: bool, applied_b: bool) {
        match (applied_a, applied_b) {
            (true, true) => self.both_applied += 1,
            (true, false) => self.a_only += 1,
            (false, true) => self.b_only += 1,
            (false, false) => self.neither += 1,
        }
    }

    /// Number of responses tallied.
    pub fn total(&self) -> u64 {
        self.both_applied + self.a_only + self.b_only + self.neither
    }

    /// Share of responses where the coders agree (`Po`).
    pub fn observed_agreement(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.both_applied + self.neither) as f64 / total as f64
    }

    /// Chance agreement from the marginal application rates (`Pe`).
    pub fn expected_agreement(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;
        let rate_a = (self.both_applied + self.a_only) as f64 / total;
        let rate_b = (self.both_applied + self.b_only) as f64 / total;
        rate_a * rate_b + (1.0 - rate_a) * (1.0 - rate_b)
    }
}
