use rae_core::{to_canonical_json_bytes, Case};
use rae_stats::{population_overview, OverviewOpts, ScoreField, ScorePopulation};

fn keys() -> Vec<String> {
    vec!["governance".to_string(), "finance".to_string()]
}

fn cases() -> Vec<Case> {
    vec![
        Case::new("a")
            .with_overall(1.0)
            .with_domain("governance", 1.0)
            .with_domain("finance", 2.0),
        Case::new("b").with_overall(3.0).with_domain("governance", 3.0),
        Case::new("c")
            .with_overall(5.0)
            .with_domain("governance", 5.0)
            .with_domain("finance", 4.0),
        Case::new("unscored"),
    ]
}

#[test]
fn missing_scores_are_dropped_not_zeroed() {
    let finance = ScorePopulation::from_cases(&cases(), ScoreField::Domain("finance".into()));
    assert_eq!(finance.values(), &[2.0, 4.0]);
    let overall = ScorePopulation::from_cases(&cases(), ScoreField::Overall);
    assert_eq!(overall.len(), 3);
}

#[test]
fn overview_combines_all_operations() {
    let overview = population_overview(&cases(), &keys(), &OverviewOpts::default());
    assert_eq!(overview.case_count, 4);
    assert_eq!(overview.overall.descriptive.n, 3);
    assert_eq!(overview.overall.descriptive.mean, 3.0);
    assert_eq!(overview.domains["finance"].descriptive.n, 2);
    assert_eq!(overview.domains["finance"].histogram.len(), 5);
    assert_eq!(overview.correlations["governance"]["governance"], 1.0);
    assert!((overview.correlations["governance"]["finance"] - 1.0).abs() < 1e-12);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let opts = OverviewOpts {
        bin_count: 4,
        std_dev_decimals: 3,
    };
    let first = to_canonical_json_bytes(&population_overview(&cases(), &keys(), &opts))
        .expect("serialize");
    let second = to_canonical_json_bytes(&population_overview(&cases(), &keys(), &opts))
        .expect("serialize");
    assert_eq!(first, second);
}
