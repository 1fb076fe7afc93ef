#![deny(missing_docs)]
#![doc = "Purposive case selection strategies and methodology text for follow-up research."]

/// Context criteria applied before sampling.
pub mod criteria;
/// Profile distances over sparse domain scores.
pub mod distance;
/// Methods-section text generation.
pub mod methodology;
/// Validated request boundary and strategy dispatch.
pub mod request;
/// Strategy names and selection metadata.
pub mod selection;
pub mod strategies;

pub use criteria::SampleCriteria;
pub use distance::{mean_profile, profile_distance};
pub use methodology::{describe_criteria, generate_methodology_text, methodology_with_criteria};
pub use request::{draw_sample, SampleRequest, SampleResult};
pub use selection::{SampleMethod, SelectedCase, SelectionRationale};
pub use strategies::{extreme_deviant, maximum_variation, purposive_sampling, typical_cases};
