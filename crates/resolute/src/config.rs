//! Prover configuration types.

/// Configuration for the saturation loop
#[derive(Debug, Clone)]
pub struct ProverConfig {
    /// Maximum number of saturation levels (0 means no limit)
    pub max_levels: usize,
    /// Maximum number of stored clauses (0 means no limit)
    pub max_clauses: usize,
    /// Perform the occurs check during unification. Off by default:
    /// `unify(x, f(x))` then yields the cyclic binding f(x)/x.
    pub occurs_check: bool,
}

impl Default for ProverConfig {
    fn default() -> Self {
        ProverConfig {
            max_levels: 0,
            max_clauses: 0,
            occurs_check: false,
        }
    }
}
