//! Provenance descriptor written beside every emitted artefact.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Records which inputs and tool versions produced an artefact.
///
/// Kept separate from engine output so that the output itself stays
/// byte-identical across repeated runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RunProvenance {
    /// SHA256 of the raw input file.
    pub input_hash: String,
    /// Name of the engine operation that ran.
    pub operation: String,
    /// RFC 3339 timestamp recording when the artefact was generated.
    pub created_at: String,
    /// Version map for all tools involved in the run.
    pub tool_versions: BTreeMap<String, String>,
}

impl RunProvenance {
    /// Stamps a provenance record for `operation` with the current time.
    pub fn now(input_hash: impl Into<String>, operation: impl Into<String>) -> Self {
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert(
            "rae-core".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );
        Self {
            input_hash: input_hash.into(),
            operation: operation.into(),
            created_at: Utc::now().to_rfc3339(),
            tool_versions,
        }
    }

    /// Adds a tool version entry.
    pub fn with_tool(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.tool_versions.insert(name.into(), version.into());
        self
    }
}
