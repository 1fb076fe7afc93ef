use std::fs;
use std::path::{Path, PathBuf};

use rae_core::{to_canonical_json_bytes, ErrorInfo, RaeError, RunProvenance};
use serde::Serialize;

fn write_error(path: &Path, err: impl ToString) -> RaeError {
    RaeError::Serde(
        ErrorInfo::new("output.write", err.to_string())
            .with_context("path", path.display().to_string()),
    )
}

/// Provenance stamp for one command run.
pub fn provenance(input_hash: &str, operation: &str) -> RunProvenance {
    RunProvenance::now(input_hash, operation)
        .with_tool("rae-cli", env!("CARGO_PKG_VERSION"))
}

/// Writes `report` as canonical JSON to `out/name` with `provenance.json` beside it.
pub fn write_artifacts<T: Serialize>(
    out: &Path,
    name: &str,
    report: &T,
    provenance: &RunProvenance,
) -> Result<PathBuf, RaeError> {
    fs::create_dir_all(out).map_err(|err| write_error(out, err))?;
    let report_path = out.join(name);
    fs::write(&report_path, to_canonical_json_bytes(report)?)
        .map_err(|err| write_error(&report_path, err))?;
    let provenance_path = out.join("provenance.json");
    fs::write(&provenance_path, to_canonical_json_bytes(provenance)?)
        .map_err(|err| write_error(&provenance_path, err))?;
    Ok(report_path)
}
