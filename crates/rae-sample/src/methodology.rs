use crate::criteria::SampleCriteria;
use crate::selection::SampleMethod;

/// One methods-section sentence naming the strategy, sample and pool size.
pub fn generate_methodology_text(
    method: SampleMethod,
    sampled_count: usize,
    pool_size: usize,
) -> String {
    let sample = plural(sampled_count, "case", "cases");
    let pool = plural(pool_size, "completed assessment", "completed assessments");
    match method {
        SampleMethod::MaximumVariation => format!(
            "A maximum-variation sample of {sample} was selected from a pool of {pool} \
             to capture the full range of organisational maturity."
        ),
        SampleMethod::ExtremeDeviant => format!(
            "An extreme/deviant-case sample of {sample} was selected from a pool of {pool}, \
             drawing the lowest- and highest-scoring organisations to examine unusual outcomes."
        ),
        SampleMethod::Typical => format!(
            "A typical-case sample of {sample} was selected from a pool of {pool}, \
             choosing the organisations closest to the average profile across all domains."
        ),
        SampleMethod::Purposive => format!(
            "A criterion-based purposive sample of {sample} was selected from a pool of {pool} \
             meeting the specified inclusion criteria."
        ),
    }
}

/// Methodology sentence followed by the criteria that narrowed the pool.
pub fn methodology_with_criteria(
    method: SampleMethod,
    sampled_count: usize,
    pool_size: usize,
    criteria: &SampleCriteria,
) -> String {
    let text = generate_methodology_text(method, sampled_count, pool_size);
    match describe_criteria(criteria) {
        Some(description) => format!("{text} Cases were restricted to {description}."),
        None => text,
    }
}

/// Renders set criteria as `country = France and size = small`.
pub fn describe_criteria(criteria: &SampleCriteria) -> Option<String> {
    let parts: Vec<String> = criteria
        .fields()
        .into_iter()
        .map(|(name, value)| format!("{name} = {value}"))
        .collect();
    match parts.split_last() {
        None => None,
        Some((last, [])) => Some(last.clone()),
        Some((last, rest)) => Some(format!("{} and {last}", rest.join(", "))),
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}
