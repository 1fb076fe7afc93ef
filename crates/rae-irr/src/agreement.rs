use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::kappa::{cohen_kappa, interpret_kappa};
use crate::prepare::TagMap;
use crate::table::ContingencyTable;

/// Interpretation reported when the coders share no response.
pub const NO_SHARED_RESPONSES: &str = "No shared responses";
/// Interpretation reported when the coders share no tag.
pub const NO_COMMON_TAGS: &str = "No common tags";

fn round_value(value: f64) -> f64 {
    (value * 1e9).round() / 1e9
}

/// Agreement on a single tag treated as a binary classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagAgreement {
    /// Tag compared.
    pub tag_name: String,
    /// Cohen's kappa for the tag.
    pub kappa: f64,
    /// Landis and Koch band for `kappa`.
    pub interpretation: String,
    /// Observed agreement `Po`, as a proportion.
    pub percentage_agreement: f64,
    /// Chance agreement `Pe`, as a proportion.
    pub expected_agreement: f64,
    /// Underlying counts.
    pub table: ContingencyTable,
}

/// Agreement between two coders over their shared responses.
///
/// `overall_kappa` is the unweighted mean of the per-tag binary kappas. It is
/// a summary of independent binary problems, not Fleiss' kappa or any other
/// multi-category coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrResult {
    /// Mean of per-tag kappas.
    pub overall_kappa: f64,
    /// Band of `overall_kappa`, or the reason nothing was compared.
    pub overall_interpretation: String,
    /// Mean of per-tag observed agreement.
    pub percentage_agreement: f64,
    /// Number of responses both coders coded.
    pub total_shared_responses: usize,
    /// Per-tag detail in the order of the common tag names.
    pub per_tag: Vec<TagAgreement>,
}

impl IrrResult {
    fn degenerate(reason: &str, total_shared_responses: usize) -> Self {
        Self {
            overall_kappa: 0.0,
            overall_interpretation: reason.to_string(),
            percentage_agreement: 0.0,
            total_shared_responses,
            per_tag: Vec::new(),
        }
    }
}

/// Per-tag Cohen's kappa over the shared responses, with their means.
///
/// No shared response, or no common tag, yields a zeroed result whose
/// interpretation names the reason.
pub fn calculate_irr(
    shared_response_ids: &[String],
    tag_map_a: &TagMap,
    tag_map_b: &TagMap,
    common_tag_names: &[String],
) -> IrrResult {
    if shared_response_ids.is_empty() {
        tracing::debug!("no shared responses between coders");
        return IrrResult::degenerate(NO_SHARED_RESPONSES, 0);
    }
    if common_tag_names.is_empty() {
        tracing::debug!(
            shared = shared_response_ids.len(),
            "no common tags between coders"
        );
        return IrrResult::degenerate(NO_COMMON_TAGS, shared_response_ids.len());
    }

    let per_tag: Vec<TagAgreement> = common_tag_names
        .par_iter()
        .map(|tag| tag_agreement(tag, shared_response_ids, tag_map_a, tag_map_b))
        .collect();

    let tags = per_tag.len() as f64;
    let overall_kappa = round_value(per_tag.iter().map(|tag| tag.kappa).sum::<f64>() / tags);
    let percentage_agreement = round_value(
        per_tag
            .iter()
            .map(|tag| tag.percentage_agreement)
            .sum::<f64>()
            / tags,
    );
    tracing::debug!(
        shared = shared_response_ids.len(),
        tags = per_tag.len(),
        overall_kappa,
        "inter-rater reliability computed"
    );
    IrrResult {
        overall_kappa,
        overall_interpretation: interpret_kappa(overall_kappa).to_string(),
        percentage_agreement,
        total_shared_responses: shared_response_ids.len(),
        per_tag,
    }
}

fn tag_agreement(
    tag: &str,
    shared_response_ids: &[String],
    tag_map_a: &TagMap,
    tag_map_b: &TagMap,
) -> TagAgreement {
    let applies = |map: &TagMap, response: &str| {
        map.get(response).is_some_and(|tags| tags.contains(tag))
    };
    let mut table = ContingencyTable::default();
    for response in shared_response_ids {
        table.record(
            applies(tag_map_a, response.as_str()),
            applies(tag_map_b, response.as_str()),
        );
    }
    let observed = table.observed_agreement();
    let expected = table.expected_agreement();
    // Rounded so that exact band edges such as 0.6 are not lost to float noise.
    let kappa = round_value(cohen_kappa(observed, expected));
    TagAgreement {
        tag_name: tag.to_string(),
        kappa,
        interpretation: interpret_kappa(kappa).to_string(),
        percentage_agreement: round_value(observed),
        expected_agreement: round_value(expected),
        table,
    }
}
