//! Variable substitutions

use super::clause::Clause;
use super::literal::{Atom, Literal};
use super::term::{Term, Variable};
use indexmap::IndexMap;
use std::fmt;

/// A substitution: an ordered set of bindings variable -> term.
///
/// Binding order is preserved because it is display-significant; the
/// semantics are order-independent since application is a single
/// simultaneous pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: IndexMap<Variable, Term>,
}

impl Substitution {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution {
            bindings: IndexMap::new(),
        }
    }

    /// A substitution with a single binding
    pub fn singleton(var: Variable, term: Term) -> Self {
        let mut subst = Substitution::new();
        subst.insert(var, term);
        subst
    }

    /// Add a binding. Identity bindings (v -> v) are dropped.
    pub fn insert(&mut self, var: Variable, term: Term) {
        if let Term::Variable(v) = &term {
            if *v == var {
                return;
            }
        }
        self.bindings.insert(var, term);
    }

    pub fn get(&self, var: &Variable) -> Option<&Term> {
        self.bindings.get(var)
    }

    pub fn contains(&self, var: &Variable) -> bool {
        self.bindings.contains_key(var)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Iterate bindings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.bindings.iter()
    }

    /// Compose with another substitution: apply `self` first, then
    /// `other`. Every binding t/v of `self` becomes other(t)/v, then
    /// bindings of `other` for still-unbound variables are appended.
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut result = Substitution::new();
        for (var, term) in self.iter() {
            result.insert(var.clone(), term.apply_substitution(other));
        }
        for (var, term) in other.iter() {
            if !self.contains(var) {
                result.insert(var.clone(), term.clone());
            }
        }
        result
    }

    /// Bindings worth showing in a proof trace. A binding is dropped
    /// only when it is a pure renaming from standardising apart (both
    /// sides variables, one of them a fresh rename). A standardised
    /// variable bound to a substantive term keeps its binding, shown
    /// under the variable's original name.
    pub fn without_renamings(&self) -> Substitution {
        use crate::inference::{base_name, is_standardised_name};

        let mut result = Substitution::new();
        for (var, term) in self.iter() {
            let standardised_var = is_standardised_name(&var.name);
            if let Term::Variable(v) = term {
                if standardised_var || is_standardised_name(&v.name) {
                    continue;
                }
            }
            let shown = if standardised_var {
                Variable::new(base_name(&var.name))
            } else {
                var.clone()
            };
            result.insert(shown, term.clone());
        }
        result
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (var, term)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} / {}", term, var)?;
        }
        write!(f, "]")
    }
}

impl Term {
    /// Apply a substitution: one simultaneous pass, bound variables are
    /// replaced and the replacement is not substituted into again.
    pub fn apply_substitution(&self, subst: &Substitution) -> Term {
        match self {
            Term::Variable(v) => subst.get(v).cloned().unwrap_or_else(|| self.clone()),
            Term::Constant(_) => self.clone(),
            Term::Function(f, args) => Term::Function(
                f.clone(),
                args.iter()
                    .map(|arg| arg.apply_substitution(subst))
                    .collect(),
            ),
        }
    }
}

impl Atom {
    pub fn apply_substitution(&self, subst: &Substitution) -> Atom {
        Atom {
            predicate: self.predicate.clone(),
            args: self
                .args
                .iter()
                .map(|arg| arg.apply_substitution(subst))
                .collect(),
        }
    }
}

impl Literal {
    pub fn apply_substitution(&self, subst: &Substitution) -> Literal {
        Literal {
            atom: self.atom.apply_substitution(subst),
            polarity: self.polarity,
        }
    }
}

impl Clause {
    pub fn apply_substitution(&self, subst: &Substitution) -> Clause {
        let mut clause = Clause::with_role(
            self.literals
                .iter()
                .map(|lit| lit.apply_substitution(subst))
                .collect(),
            self.role,
        );
        clause.level = self.level;
        clause
    }
}
