use std::fmt;

use serde::{Deserialize, Serialize};

const DEGENERATE_EPSILON: f64 = 1e-12;

/// Cohen's kappa from observed and expected agreement.
///
/// When chance agreement is total (`Pe = 1`) the ratio is undefined; kappa
/// is then 1 for complete observed agreement and 0 otherwise.
pub fn cohen_kappa(observed: f64, expected: f64) -> f64 {
    if (1.0 - expected).abs() < DEGENERATE_EPSILON {
        return if (1.0 - observed).abs() < DEGENERATE_EPSILON {
            1.0
        } else {
            0.0
        };
    }
    (observed - expected) / (1.0 - expected)
}

/// Landis and Koch interpretation bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KappaBand {
    /// Below chance.
    Poor,
    /// 0.00 to 0.20.
    Slight,
    /// 0.21 to 0.40.
    Fair,
    /// 0.41 to 0.60.
    Moderate,
    /// 0.61 to 0.80.
    Substantial,
    /// 0.81 to 1.00.
    AlmostPerfect,
}

impl KappaBand {
    /// Band containing `kappa`.
    pub fn from_kappa(kappa: f64) -> Self {
        if kappa < 0.0 {
            KappaBand::Poor
        } else if kappa <= 0.20 {
            KappaBand::Slight
        } else if kappa <= 0.40 {
            KappaBand::Fair
        } else if kappa <= 0.60 {
            KappaBand::Moderate
        } else if kappa <= 0.80 {
            KappaBand::Substantial
        } else {
            KappaBand::AlmostPerfect
        }
    }

    /// Human readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            KappaBand::Poor => "poor",
            KappaBand::Slight => "slight",
            KappaBand::Fair => "fair",
            KappaBand::Moderate => "moderate",
            KappaBand::Substantial => "substantial",
            KappaBand::AlmostPerfect => "almost perfect",
        }
    }
}

impl fmt::Display for KappaBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Interpretation label for `kappa`.
pub fn interpret_kappa(kappa: f64) -> &'static str {
    KappaBand::from_kappa(kappa).label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(KappaBand::from_kappa(-0.01), KappaBand::Poor);
        assert_eq!(KappaBand::from_kappa(0.0), KappaBand::Slight);
        assert_eq!(KappaBand::from_kappa(0.20), KappaBand::Slight);
        assert_eq!(KappaBand::from_kappa(0.21), KappaBand::Fair);
        assert_eq!(KappaBand::from_kappa(0.40), KappaBand::Fair);
        assert_eq!(KappaBand::from_kappa(0.60), KappaBand::Moderate);
        assert_eq!(KappaBand::from_kappa(0.80), KappaBand::Substantial);
        assert_eq!(KappaBand::from_kappa(0.81), KappaBand::AlmostPerfect);
        assert_eq!(KappaBand::from_kappa(1.0), KappaBand::AlmostPerfect);
    }

    #[test]
    fn degenerate_chance_agreement() {
        assert_eq!(cohen_kappa(1.0, 1.0), 1.0);
        assert_eq!(cohen_kappa(0.5, 1.0), 0.0);
        assert_eq!(cohen_kappa(0.5, 0.5), 0.0);
    }
}
