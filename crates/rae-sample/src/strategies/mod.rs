//! The four case selection strategies.
//!
//! Every strategy clamps the requested count to the usable pool and never
//! fails on under-supply. Ties are broken by input order.

mod extreme;
mod purposive;
mod typical;
mod variation;

pub use extreme::extreme_deviant;
pub use purposive::purposive_sampling;
pub use typical::typical_cases;
pub use variation::maximum_variation;
