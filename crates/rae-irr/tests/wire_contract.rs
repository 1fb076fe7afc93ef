use assert_json_diff::assert_json_eq;
use proptest::prelude::*;
use rae_core::CodingAssignment;
use rae_irr::compare_coders;
use serde_json::json;

#[test]
fn result_serializes_with_exported_field_names() {
    let assignments = vec![
        CodingAssignment::new("r1", "a", "funding"),
        CodingAssignment::new("r1", "b", "funding"),
    ];
    let value = serde_json::to_value(compare_coders(&assignments, "a", "b")).expect("json");
    assert_json_eq!(
        value,
        json!({
            "overallKappa": 1.0,
            "overallInterpretation": "almost perfect",
            "percentageAgreement": 1.0,
            "totalSharedResponses": 1,
            "perTag": [{
                "tagName": "funding",
                "kappa": 1.0,
                "interpretation": "almost perfect",
                "percentageAgreement": 1.0,
                "expectedAgreement": 1.0,
                "table": {"bothApplied": 1, "aOnly": 0, "bOnly": 0, "neither": 0}
            }]
        })
    );
}

fn coding() -> impl Strategy<Value = Vec<CodingAssignment>> {
    let coder = prop_oneof![Just("a"), Just("b")];
    let tag = prop_oneof![Just("x"), Just("y"), Just("z")];
    proptest::collection::vec((0u8..8, coder, tag), 0..40).prop_map(|rows| {
        rows.into_iter()
            .map(|(response, coder, tag)| {
                CodingAssignment::new(format!("r{response}"), coder, tag)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn kappa_and_agreement_stay_bounded(assignments in coding()) {
        let result = compare_coders(&assignments, "a", "b");
        prop_assert!(result.overall_kappa.is_finite());
        prop_assert!((-1.0..=1.0).contains(&result.overall_kappa));
        prop_assert!((0.0..=1.0).contains(&result.percentage_agreement));
        for tag in &result.per_tag {
            prop_assert!((-1.0..=1.0).contains(&tag.kappa));
            prop_assert_eq!(tag.table.total() as usize, result.total_shared_responses);
        }
    }
}
