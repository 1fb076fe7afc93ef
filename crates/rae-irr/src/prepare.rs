use std::collections::{BTreeMap, BTreeSet};

use rae_core::CodingAssignment;
use serde::{Deserialize, Serialize};

use crate::agreement::{calculate_irr, IrrResult};

/// Tags applied per response by one coder.
pub type TagMap = BTreeMap<String, BTreeSet<String>>;

/// Engine inputs for comparing two coders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrInput {
    /// Responses both coders coded at least once, sorted.
    pub shared_response_ids: Vec<String>,
    /// Coder A's tags per response.
    pub tag_map_a: TagMap,
    /// Coder B's tags per response.
    pub tag_map_b: TagMap,
    /// Tags both coders used anywhere in their data, sorted.
    pub common_tag_names: Vec<String>,
}

impl IrrInput {
    /// Groups raw assignments for `coder_a` and `coder_b`.
    ///
    /// Assignments from other coders are ignored and repeated applications
    /// of a tag to one response collapse to one.
    pub fn from_assignments(
        assignments: &[CodingAssignment],
        coder_a: &str,
        coder_b: &str,
    ) -> Self {
        let tag_map_a = tag_map(assignments, coder_a);
        let tag_map_b = tag_map(assignments, coder_b);

        let shared_response_ids = tag_map_a
            .keys()
            .filter(|id| tag_map_b.contains_key(*id))
            .cloned()
            .collect();
        let tags_a = used_tags(&tag_map_a);
        let tags_b = used_tags(&tag_map_b);
        let common_tag_names = tags_a.intersection(&tags_b).cloned().collect();

        Self {
            shared_response_ids,
            tag_map_a,
            tag_map_b,
            common_tag_names,
        }
    }

    /// Runs the agreement computation over these inputs.
    pub fn calculate(&self) -> IrrResult {
        calculate_irr(
            &self.shared_response_ids,
            &self.tag_map_a,
            &self.tag_map_b,
            &self.common_tag_names,
        )
    }
}

fn tag_map(assignments: &[CodingAssignment], coder: &str) -> TagMap {
    let mut map = TagMap::new();
    for assignment in assignments.iter().filter(|a| a.coder_id == coder) {
        map.entry(assignment.response_id.clone())
            .or_default()
            .insert(assignment.tag_name.clone());
    }
    map
}

fn used_tags(map: &TagMap) -> BTreeSet<String> {
    map.values().flatten().cloned().collect()
}

/// Groups `assignments` and computes agreement between two coders.
pub fn compare_coders(
    assignments: &[CodingAssignment],
    coder_a: &str,
    coder_b: &str,
) -> IrrResult {
    IrrInput::from_assignments(assignments, coder_a, coder_b).calculate()
}
