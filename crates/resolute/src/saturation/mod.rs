//! Breadth-first saturation with tautology and subsumption pruning

pub mod state;
pub mod subsumption;

pub use state::{SaturationResult, SaturationState};
pub use subsumption::{are_variants, strictly_subsumes, subsumes};
