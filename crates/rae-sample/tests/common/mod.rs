#![allow(dead_code)]

use rae_core::{Case, CaseContext};

pub fn keys() -> Vec<String> {
    vec!["governance".to_string()]
}

/// Five cases scored 1..=5 on both the overall and the single domain.
pub fn graded_population() -> Vec<Case> {
    (1..=5)
        .map(|score| {
            Case::new(format!("case-{score}"))
                .with_overall(score as f64)
                .with_domain("governance", score as f64)
        })
        .collect()
}

pub fn located(id: &str, country: &str, sector: &str, size: &str) -> Case {
    Case::new(id).with_overall(3.0).with_context(CaseContext {
        country: Some(country.to_string()),
        sector: Some(sector.to_string()),
        size: Some(size.to_string()),
    })
}

pub fn ids(selected: &[rae_sample::SelectedCase]) -> Vec<&str> {
    selected.iter().map(|item| item.case_id()).collect()
}
