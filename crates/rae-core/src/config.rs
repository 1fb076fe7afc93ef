use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, RaeError};
use crate::serde::from_yaml_slice;

/// Largest accepted histogram bin count.
pub const MAX_BIN_COUNT: usize = 100;
/// Largest accepted number of decimal places on standard deviations.
pub const MAX_STD_DEV_DECIMALS: u32 = 15;

/// YAML-configurable defaults applied by the caller around the engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fixed set of assessment domain keys.
    #[serde(default = "default_domains")]
    pub domains: Vec<String>,
    /// Histogram layout.
    #[serde(default)]
    pub histogram: HistogramConfig,
    /// Sample request limits.
    #[serde(default)]
    pub sampling: SamplingConfig,
    /// Descriptive statistics presentation.
    #[serde(default)]
    pub stats: StatsConfig,
}

fn default_domains() -> Vec<String> {
    [
        "governance",
        "finance",
        "impact",
        "operations",
        "people",
        "market",
        "innovation",
        "sustainability",
    ]
    .iter()
    .map(|key| key.to_string())
    .collect()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            domains: default_domains(),
            histogram: HistogramConfig::default(),
            sampling: SamplingConfig::default(),
            stats: StatsConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Loads a configuration from the provided YAML path.
    pub fn load(path: &Path) -> Result<Self, RaeError> {
        let bytes = fs::read(path).map_err(|err| {
            RaeError::Config(
                ErrorInfo::new("config.read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        let config: Self = from_yaml_slice(&bytes)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), RaeError> {
        if self.sampling.min_count == 0 || self.sampling.min_count > self.sampling.max_count {
            return Err(RaeError::Config(
                ErrorInfo::new("config.sampling_bounds", "invalid sample count bounds")
                    .with_context("min_count", self.sampling.min_count.to_string())
                    .with_context("max_count", self.sampling.max_count.to_string()),
            ));
        }
        if self.histogram.bin_count == 0 || self.histogram.bin_count > MAX_BIN_COUNT {
            return Err(RaeError::Config(
                ErrorInfo::new("config.bin_count", "histogram bin count out of range")
                    .with_context("bin_count", self.histogram.bin_count.to_string())
                    .with_context("max", MAX_BIN_COUNT.to_string()),
            ));
        }
        if self.stats.std_dev_decimals > MAX_STD_DEV_DECIMALS {
            return Err(RaeError::Config(
                ErrorInfo::new("config.std_dev_decimals", "too many std-dev decimal places")
                    .with_context(
                        "std_dev_decimals",
                        self.stats.std_dev_decimals.to_string(),
                    )
                    .with_context("max", MAX_STD_DEV_DECIMALS.to_string()),
            ));
        }
        Ok(())
    }
}

/// Histogram layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramConfig {
    /// Number of equal-width bins across the 0 to 5 scale.
    #[serde(default = "default_bin_count")]
    pub bin_count: usize,
}

fn default_bin_count() -> usize {
    5
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bin_count: default_bin_count(),
        }
    }
}

/// Bounds on the number of cases a sample request may ask for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Smallest accepted sample size.
    #[serde(default = "default_min_count")]
    pub min_count: usize,
    /// Largest accepted sample size.
    #[serde(default = "default_max_count")]
    pub max_count: usize,
}

fn default_min_count() -> usize {
    1
}

fn default_max_count() -> usize {
    20
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            min_count: default_min_count(),
            max_count: default_max_count(),
        }
    }
}

/// Presentation settings for descriptive statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Decimal places kept on the reported standard deviation.
    #[serde(default = "default_std_dev_decimals")]
    pub std_dev_decimals: u32,
}

fn default_std_dev_decimals() -> u32 {
    2
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            std_dev_decimals: default_std_dev_decimals(),
        }
    }
}
