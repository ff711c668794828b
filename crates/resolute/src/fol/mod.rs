//! First-order logic data structures
//!
//! The fundamental types for representing CNF problems: terms, literals,
//! clauses and substitutions. Predicates are a separate layer over terms,
//! so a predicate can never appear inside a function argument.

pub mod clause;
pub mod literal;
pub mod substitution;
pub mod term;

// Re-export commonly used types
pub use clause::{Clause, ClauseRole};
pub use literal::{Atom, Literal, PredicateSymbol};
pub use substitution::Substitution;
pub use term::{Constant, FunctionSymbol, Term, Variable};
