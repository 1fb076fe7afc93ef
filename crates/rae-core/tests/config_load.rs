use std::fs;

use rae_core::{
    stable_hash_string, to_canonical_json_bytes, to_yaml_string, EngineConfig, RaeError,
    MAX_BIN_COUNT, MAX_STD_DEV_DECIMALS,
};

#[test]
fn defaults_cover_eight_domains() {
    let config = EngineConfig::default();
    assert_eq!(config.domains.len(), 8);
    assert_eq!(config.histogram.bin_count, 5);
    assert_eq!(config.sampling.min_count, 1);
    assert_eq!(config.sampling.max_count, 20);
    assert_eq!(config.stats.std_dev_decimals, 2);
}

#[test]
fn partial_yaml_keeps_defaults() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("engine.yaml");
    fs::write(&path, "domains: [governance, finance]\nhistogram:\n  bin_count: 10\n")
        .expect("write config");
    let config = EngineConfig::load(&path).expect("load config");
    assert_eq!(config.domains, vec!["governance", "finance"]);
    assert_eq!(config.histogram.bin_count, 10);
    assert_eq!(config.sampling.max_count, 20);
}

#[test]
fn written_defaults_load_back_unchanged() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("engine.yaml");
    let yaml = to_yaml_string(&EngineConfig::default()).expect("yaml");
    fs::write(&path, yaml).expect("write config");
    assert_eq!(EngineConfig::load(&path).expect("load"), EngineConfig::default());
}

#[test]
fn inverted_sampling_bounds_are_rejected() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("engine.yaml");
    fs::write(&path, "sampling:\n  min_count: 5\n  max_count: 2\n").expect("write config");
    let err = EngineConfig::load(&path).expect_err("must reject");
    assert!(matches!(err, RaeError::Config(ref info) if info.code == "config.sampling_bounds"));
}

#[test]
fn excessive_std_dev_decimals_are_rejected() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("engine.yaml");
    fs::write(&path, "stats:\n  std_dev_decimals: 400\n").expect("write config");
    let err = EngineConfig::load(&path).expect_err("must reject");
    assert_eq!(err.code(), "config.std_dev_decimals");
    assert_eq!(err.info().context["max"], MAX_STD_DEV_DECIMALS.to_string());
}

#[test]
fn oversized_bin_count_is_rejected() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("engine.yaml");
    fs::write(&path, format!("histogram:\n  bin_count: {}\n", MAX_BIN_COUNT + 1))
        .expect("write config");
    let err = EngineConfig::load(&path).expect_err("must reject");
    assert_eq!(err.code(), "config.bin_count");
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let err = EngineConfig::load(&dir.path().join("absent.yaml")).expect_err("must fail");
    assert_eq!(err.code(), "config.read");
}

#[test]
fn canonical_bytes_are_key_sorted_and_hash_stable() {
    let config = EngineConfig::default();
    let bytes = to_canonical_json_bytes(&config).expect("canonical");
    let text = String::from_utf8(bytes).expect("utf8");
    let domains_at = text.find("\"domains\"").expect("domains key");
    let stats_at = text.find("\"stats\"").expect("stats key");
    assert!(domains_at < stats_at);
    assert_eq!(
        stable_hash_string(&config).expect("hash"),
        stable_hash_string(&config.clone()).expect("hash")
    );
}
