//! Inference: binary resolution and proof reconstruction

pub mod derivation;
pub mod proof;
pub mod resolution;

pub use derivation::Derivation;
pub use proof::{Proof, ProofStep};
pub use resolution::{base_name, is_standardised_name, resolve, FreshVariables, InferenceResult};
