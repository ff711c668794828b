//! Atoms and literals in first-order logic

use super::term::{Term, Variable};
use std::collections::BTreeSet;
use std::fmt;

/// A predicate symbol with arity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PredicateSymbol {
    pub name: String,
    pub arity: usize,
}

impl PredicateSymbol {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        PredicateSymbol {
            name: name.into(),
            arity,
        }
    }
}

/// An atomic formula (predicate applied to terms)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    pub predicate: PredicateSymbol,
    pub args: Vec<Term>,
}

impl Atom {
    pub fn new(predicate: PredicateSymbol, args: Vec<Term>) -> Self {
        Atom { predicate, args }
    }
}

/// A literal (positive or negative atom)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    pub atom: Atom,
    /// true = positive, false = negated
    pub polarity: bool,
}

impl Literal {
    /// Create a new positive literal
    pub fn positive(atom: Atom) -> Self {
        Literal {
            atom,
            polarity: true,
        }
    }

    /// Create a new negative literal
    pub fn negative(atom: Atom) -> Self {
        Literal {
            atom,
            polarity: false,
        }
    }

    /// Complementary to another literal: same predicate, opposite polarity
    pub fn is_complementary_to(&self, other: &Literal) -> bool {
        self.polarity != other.polarity && self.atom.predicate == other.atom.predicate
    }

    /// Collect all variables in this literal
    pub fn collect_variables(&self, vars: &mut BTreeSet<Variable>) {
        for term in &self.atom.args {
            term.collect_variables(vars);
        }
    }

    /// Key under which literals are ordered inside a clause: predicate
    /// name first, positives before negations, then the rendered
    /// argument list. This is the order clauses print in.
    pub fn ordering_key(&self) -> (String, bool, String) {
        let args = self
            .atom
            .args
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(",");
        (self.atom.predicate.name.clone(), !self.polarity, args)
    }
}

// Display implementations

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.predicate.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            write!(f, "~")?;
        }
        write!(f, "{}", self.atom)
    }
}
