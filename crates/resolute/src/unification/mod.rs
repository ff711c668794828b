//! Robinson-style unification over the term algebra

mod mgu;


pub use mgu::{
    unify, unify_args, unify_atoms, unify_complementary, unify_terms, UnificationError,
    UnificationResult,
};
