//! Clauses: duplicate-free disjunctions of literals in canonical order

use super::literal::Literal;
use super::term::Variable;
use std::collections::BTreeSet;
use std::fmt;

/// Role of a clause in the proof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClauseRole {
    /// Knowledge-base clause
    #[default]
    Axiom,
    /// Negated goal clause
    NegatedConjecture,
    /// Derived by resolution
    Derived,
}

/// A clause (disjunction of literals). The empty clause denotes
/// contradiction.
///
/// Literals are stored in canonical order (see `Literal::ordering_key`)
/// with syntactic duplicates removed, so structural equality and
/// printing are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<Literal>,
    /// Index in the clause store, assigned on insertion
    pub id: Option<usize>,
    pub role: ClauseRole,
    /// Saturation level at which the clause was derived (0 for input)
    pub level: usize,
}

impl Clause {
    /// Create a clause from literals, deduplicating and sorting
    pub fn new(literals: Vec<Literal>) -> Self {
        Clause::with_role(literals, ClauseRole::default())
    }

    /// Create a clause with a specific role
    pub fn with_role(literals: Vec<Literal>, role: ClauseRole) -> Self {
        let mut literals = literals;
        literals.sort_by_cached_key(|lit| lit.ordering_key());
        literals.dedup();
        Clause {
            literals,
            id: None,
            role,
            level: 0,
        }
    }

    /// Check if this clause is empty (contradiction)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// A tautology contains a literal and its exact negation: same
    /// predicate, identical argument lists, opposite polarity.
    pub fn is_tautology(&self) -> bool {
        for i in 0..self.literals.len() {
            for j in (i + 1)..self.literals.len() {
                if self.literals[i].atom == self.literals[j].atom
                    && self.literals[i].polarity != self.literals[j].polarity
                {
                    return true;
                }
            }
        }
        false
    }

    /// Collect all variables of all literals
    pub fn collect_variables(&self, vars: &mut BTreeSet<Variable>) {
        for lit in &self.literals {
            lit.collect_variables(vars);
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", lit)?;
        }
        write!(f, "]")
    }
}
