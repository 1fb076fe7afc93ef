pub mod irr;
pub mod sample;
pub mod stats;
