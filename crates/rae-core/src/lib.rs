#![deny(missing_docs)]
#![doc = "Shared records, errors and configuration for the research analytics engine."]

/// YAML engine configuration.
pub mod config;
pub mod errors;
/// Canonical hashing helpers.
pub mod hash;
pub mod provenance;
pub mod records;
pub mod serde;

pub use config::{
    EngineConfig, HistogramConfig, SamplingConfig, StatsConfig, MAX_BIN_COUNT,
    MAX_STD_DEV_DECIMALS,
};
pub use errors::{ErrorInfo, RaeError};
pub use hash::{hash_bytes, stable_hash_string};
pub use provenance::RunProvenance;
pub use records::{validate_cases, Case, CaseContext, CodingAssignment, SCORE_MAX, SCORE_MIN};
pub use crate::serde::{
    from_json_slice, from_yaml_slice, to_canonical_json_bytes, to_yaml_string,
};
