//! Binary resolution with standardisation apart

use super::derivation::Derivation;
use crate::fol::{Clause, ClauseRole, Literal, Substitution, Term, Variable};
use crate::unification::unify_complementary;
use std::collections::BTreeSet;

/// Marker inserted between a variable's base name and its fresh suffix
/// when standardising apart. Identifiers cannot contain it, so renamed
/// variables never collide with parsed ones.
const FRESH_MARKER: char = '#';

/// Whether a variable name was produced by standardising apart
pub fn is_standardised_name(name: &str) -> bool {
    name.contains(FRESH_MARKER)
}

/// The name a standardised variable had before renaming
pub fn base_name(name: &str) -> &str {
    name.split(FRESH_MARKER).next().unwrap_or(name)
}

/// Session-scoped counter for standardisation suffixes
#[derive(Debug, Default)]
pub struct FreshVariables {
    next: usize,
}

impl FreshVariables {
    pub fn new() -> Self {
        FreshVariables::default()
    }

    fn next_suffix(&mut self) -> usize {
        let suffix = self.next;
        self.next += 1;
        suffix
    }
}

/// A resolvent together with its provenance
#[derive(Debug, Clone)]
pub struct InferenceResult {
    pub conclusion: Clause,
    pub derivation: Derivation,
}

/// Apply binary resolution between two clauses, producing every
/// resolvent of a complementary literal pair.
///
/// Variables of `c2` that also occur in `c1` are renamed with a fresh
/// suffix first, so equal variable letters in the two clauses cannot
/// capture each other. Literal indices in the emitted derivations refer
/// to the parents' stored literal order.
pub fn resolve(
    c1: &Clause,
    id1: usize,
    c2: &Clause,
    id2: usize,
    fresh: &mut FreshVariables,
    occurs_check: bool,
) -> Vec<InferenceResult> {
    let mut results = Vec::new();

    let renamed = standardise_apart(c1, c2, fresh);

    for (i, lit1) in c1.literals.iter().enumerate() {
        for (j, lit2) in renamed.iter().enumerate() {
            if !lit1.is_complementary_to(lit2) {
                continue;
            }
            if let Ok(mgu) = unify_complementary(lit1, lit2, occurs_check) {
                let mut literals = collect_literals_except(&c1.literals, i, &mgu);
                literals.extend(collect_literals_except(&renamed, j, &mgu));

                results.push(InferenceResult {
                    conclusion: Clause::with_role(literals, ClauseRole::Derived),
                    derivation: Derivation {
                        left: id1,
                        right: id2,
                        left_literal: i,
                        right_literal: j,
                        mgu,
                    },
                });
            }
        }
    }

    results
}

/// Rename the variables of `c2` that collide with variables of `c1`,
/// keeping literal positions aligned with the original clause.
fn standardise_apart(c1: &Clause, c2: &Clause, fresh: &mut FreshVariables) -> Vec<Literal> {
    let mut left_vars = BTreeSet::new();
    c1.collect_variables(&mut left_vars);
    let mut right_vars = BTreeSet::new();
    c2.collect_variables(&mut right_vars);

    let shared: Vec<&Variable> = right_vars.iter().filter(|v| left_vars.contains(v)).collect();
    if shared.is_empty() {
        return c2.literals.clone();
    }

    let suffix = fresh.next_suffix();
    let mut renaming = Substitution::new();
    for var in shared {
        let renamed = Variable::new(format!("{}{}{}", var.name, FRESH_MARKER, suffix));
        renaming.insert(var.clone(), Term::Variable(renamed));
    }

    c2.literals
        .iter()
        .map(|lit| lit.apply_substitution(&renaming))
        .collect()
}

/// Side literals of a clause: everything but the resolved literal, with
/// the unifier applied.
fn collect_literals_except(
    literals: &[Literal],
    exclude: usize,
    subst: &Substitution,
) -> Vec<Literal> {
    literals
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != exclude)
        .map(|(_, lit)| lit.apply_substitution(subst))
        .collect()
}
