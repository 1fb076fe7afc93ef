use rae_core::{to_canonical_json_bytes, CodingAssignment};
use rae_irr::{compare_coders, IrrInput, NO_COMMON_TAGS, NO_SHARED_RESPONSES};

fn assign(response: &str, coder: &str, tag: &str) -> CodingAssignment {
    CodingAssignment::new(response, coder, tag)
}

fn sample_assignments() -> Vec<CodingAssignment> {
    vec![
        assign("r1", "alice", "funding"),
        assign("r1", "alice", "funding"),
        assign("r1", "bob", "funding"),
        assign("r2", "alice", "staff"),
        assign("r2", "bob", "staff"),
        assign("r3", "alice", "funding"),
        assign("r4", "bob", "governance"),
        assign("r2", "carol", "funding"),
    ]
}

#[test]
fn shared_ids_and_common_tags() {
    let input = IrrInput::from_assignments(&sample_assignments(), "alice", "bob");
    assert_eq!(input.shared_response_ids, vec!["r1", "r2"]);
    assert_eq!(input.common_tag_names, vec!["funding", "staff"]);
    assert_eq!(input.tag_map_a["r1"].len(), 1);
    assert!(input.tag_map_a.contains_key("r3"));
    assert!(!input.tag_map_b.contains_key("r3"));
}

#[test]
fn unshared_responses_do_not_count() {
    let result = compare_coders(&sample_assignments(), "alice", "bob");
    assert_eq!(result.total_shared_responses, 2);
    assert_eq!(result.overall_kappa, 1.0);
    assert_eq!(result.overall_interpretation, "almost perfect");
}

#[test]
fn unknown_coder_has_no_shared_responses() {
    let result = compare_coders(&sample_assignments(), "alice", "dave");
    assert_eq!(result.overall_interpretation, NO_SHARED_RESPONSES);
}

#[test]
fn disjoint_vocabularies_have_no_common_tags() {
    let assignments = vec![assign("r1", "alice", "x"), assign("r1", "bob", "y")];
    let result = compare_coders(&assignments, "alice", "bob");
    assert_eq!(result.overall_interpretation, NO_COMMON_TAGS);
    assert_eq!(result.total_shared_responses, 1);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let first = compare_coders(&sample_assignments(), "alice", "bob");
    let second = compare_coders(&sample_assignments(), "alice", "bob");
    assert_eq!(
        to_canonical_json_bytes(&first).expect("json"),
        to_canonical_json_bytes(&second).expect("json")
    );
}
