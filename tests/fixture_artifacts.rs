use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use rae_cli::{run, Cli};
use serde_json::Value;
use tempfile::tempdir;

fn fixture(name: &str) -> String {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    base.join("../../fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

fn run_into(out: &Path, args: &[&str]) -> Vec<u8> {
    let out_arg = out.to_string_lossy().into_owned();
    let argv = std::iter::once("rae")
        .chain(args.iter().copied())
        .chain(["--out", out_arg.as_str()]);
    let cli = Cli::try_parse_from(argv).expect("parse");
    let report = run(&cli).expect("run");
    fs::read(report).expect("read report")
}

fn twice(args: &[&str]) -> (Vec<u8>, Vec<u8>, Value) {
    let dir = tempdir().expect("tempdir");
    let first = run_into(&dir.path().join("a"), args);
    let second = run_into(&dir.path().join("b"), args);
    let provenance: Value =
        serde_json::from_slice(&fs::read(dir.path().join("a/provenance.json")).expect("read"))
            .expect("provenance json");
    (first, second, provenance)
}

#[test]
fn stats_report_is_byte_identical_across_runs() {
    let cases = fixture("assessments.json");
    let (first, second, provenance) = twice(&["stats", "--cases", &cases]);
    assert_eq!(first, second);
    assert_eq!(provenance["operation"], "stats");

    let report: Value = serde_json::from_slice(&first).expect("report json");
    // org-03 has no recorded overall score and org-08 has none at all.
    assert_eq!(report["caseCount"], 8);
    assert_eq!(report["overall"]["descriptive"]["n"], 6);
    assert_eq!(report["domains"]["governance"]["descriptive"]["n"], 7);
    assert_eq!(report["domains"]["sustainability"]["descriptive"]["n"], 0);
    assert_eq!(report["correlations"]["sustainability"]["sustainability"], 1.0);
}

#[test]
fn sample_reports_are_byte_identical_across_runs() {
    let cases = fixture("assessments.json");
    for method in ["maximum-variation", "extreme-deviant", "typical", "purposive"] {
        let (first, second, provenance) = twice(&[
            "sample", "--cases", &cases, "--method", method, "--count", "3", "--country",
            "France",
        ]);
        assert_eq!(first, second, "{method}");
        assert_eq!(provenance["operation"], format!("sample:{method}"));

        let report: Value = serde_json::from_slice(&first).expect("report json");
        assert_eq!(report["poolSize"], 3, "{method}");
        assert_eq!(report["selected"].as_array().unwrap().len(), 3, "{method}");
    }
}

#[test]
fn irr_report_is_byte_identical_across_runs() {
    let coding = fixture("coding.json");
    let (first, second, _) = twice(&[
        "irr",
        "--assignments",
        &coding,
        "--coder-a",
        "human",
        "--coder-b",
        "model",
    ]);
    assert_eq!(first, second);

    let report: Value = serde_json::from_slice(&first).expect("report json");
    let tags: Vec<&str> = report["perTag"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tag| tag["tagName"].as_str().unwrap())
        .collect();
    assert_eq!(tags, vec!["access", "cost", "trust"]);
}
