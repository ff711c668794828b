//! Resolute: an autonomous theorem prover for first-order predicate logic
//!
//! Given a knowledge base of CNF clauses and a set of already-negated
//! goal clauses, the prover searches breadth-first for the empty clause
//! by binary resolution, pruning tautologies and subsumed clauses, and
//! reports the refutation as an ordered derivation trace.

pub mod config;
pub mod error;
pub mod fol;
pub mod inference;
pub mod json;
pub mod parser;
pub mod prover;
pub mod saturation;
pub mod unification;

// Re-export commonly used types
pub use config::ProverConfig;
pub use error::{ProverError, Result};
pub use fol::{Atom, Clause, ClauseRole, Constant, FunctionSymbol, Literal, PredicateSymbol, Substitution, Term, Variable};
pub use inference::{resolve, Derivation, FreshVariables, InferenceResult, Proof, ProofStep};
pub use json::{read_problem, ProblemJson};
pub use parser::parse_clause;
pub use prover::{prove, ProveReport};
pub use saturation::{SaturationResult, SaturationState};
pub use unification::{unify, unify_atoms, unify_complementary, UnificationError, UnificationResult};
