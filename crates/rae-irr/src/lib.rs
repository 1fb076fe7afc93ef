#![deny(missing_docs)]
#![doc = "Inter-rater reliability between two coders or coding layers."]

/// Per-tag kappa and its averages.
pub mod agreement;
/// Cohen's kappa and interpretation bands.
pub mod kappa;
/// Grouping raw coding assignments into engine inputs.
pub mod prepare;
/// Binary agreement tables.
pub mod table;

pub use agreement::{
    calculate_irr, IrrResult, TagAgreement, NO_COMMON_TAGS, NO_SHARED_RESPONSES,
};
pub use kappa::{cohen_kappa, interpret_kappa, KappaBand};
pub use prepare::{compare_coders, IrrInput, TagMap};
pub use table::ContingencyTable;
