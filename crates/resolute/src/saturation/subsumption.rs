//! Subsumption checking for redundancy elimination
//!
//! Clause `A` subsumes clause `B` when some substitution θ maps every
//! literal of `A` onto a literal of `B` (same predicate and polarity,
//! distinct targets). The check assigns literals of `A` to literals of
//! `B` by backtracking over all candidate targets with a consistent
//! one-way match; this is sound and complete but exponential in clause
//! length in the worst case, which the small clauses of this engine
//! tolerate.

use crate::fol::{Atom, Clause, Literal, Substitution, Term, Variable};

/// Does `subsumer` subsume `subsumee`?
pub fn subsumes(subsumer: &Clause, subsumee: &Clause) -> bool {
    if subsumer.len() > subsumee.len() {
        return false;
    }
    let mut used = vec![false; subsumee.len()];
    find_subsumption_mapping(subsumer, subsumee, 0, &Substitution::new(), &mut used)
}

/// Strict subsumption: subsumption between clauses that are not mere
/// variants of each other. Only strict subsumption deletes clauses.
pub fn strictly_subsumes(subsumer: &Clause, subsumee: &Clause) -> bool {
    subsumes(subsumer, subsumee) && !are_variants(subsumer, subsumee)
}

/// Are two clauses equal up to an injective renaming of variables?
pub fn are_variants(clause1: &Clause, clause2: &Clause) -> bool {
    if clause1.len() != clause2.len() {
        return false;
    }

    let mut forward = Substitution::new();
    let mut seen_targets: Vec<Variable> = Vec::new();

    for (lit1, lit2) in clause1.literals.iter().zip(&clause2.literals) {
        if lit1.polarity != lit2.polarity {
            return false;
        }
        if !atoms_match_as_renaming(&lit1.atom, &lit2.atom, &mut forward, &mut seen_targets) {
            return false;
        }
    }

    true
}

fn atoms_match_as_renaming(
    atom1: &Atom,
    atom2: &Atom,
    forward: &mut Substitution,
    seen_targets: &mut Vec<Variable>,
) -> bool {
    if atom1.predicate != atom2.predicate {
        return false;
    }
    atom1
        .args
        .iter()
        .zip(&atom2.args)
        .all(|(t1, t2)| terms_match_as_renaming(t1, t2, forward, seen_targets))
}

fn terms_match_as_renaming(
    term1: &Term,
    term2: &Term,
    forward: &mut Substitution,
    seen_targets: &mut Vec<Variable>,
) -> bool {
    match (term1, term2) {
        (Term::Variable(v1), Term::Variable(v2)) => match forward.get(v1) {
            Some(mapped) => mapped == term2,
            None => {
                // Injective: no two source variables may share a target
                if seen_targets.contains(v2) {
                    return false;
                }
                seen_targets.push(v2.clone());
                forward.insert(v1.clone(), term2.clone());
                true
            }
        },
        (Term::Constant(c1), Term::Constant(c2)) => c1 == c2,
        (Term::Function(f1, args1), Term::Function(f2, args2)) => {
            f1 == f2
                && args1.len() == args2.len()
                && args1
                    .iter()
                    .zip(args2)
                    .all(|(a1, a2)| terms_match_as_renaming(a1, a2, forward, seen_targets))
        }
        _ => false,
    }
}

/// Assign each literal of the subsumer to a distinct unused literal of
/// the subsumee, backtracking on conflicts.
fn find_subsumption_mapping(
    subsumer: &Clause,
    subsumee: &Clause,
    subsumer_idx: usize,
    subst: &Substitution,
    used: &mut Vec<bool>,
) -> bool {
    if subsumer_idx >= subsumer.len() {
        return true;
    }

    let subsumer_lit = &subsumer.literals[subsumer_idx];

    for (i, subsumee_lit) in subsumee.literals.iter().enumerate() {
        if used[i] {
            continue;
        }
        let mut candidate = subst.clone();
        if match_literals(subsumer_lit, subsumee_lit, &mut candidate) {
            used[i] = true;
            if find_subsumption_mapping(subsumer, subsumee, subsumer_idx + 1, &candidate, used) {
                return true;
            }
            used[i] = false;
        }
    }

    false
}

/// One-way match: variables of the pattern bind to terms of the target,
/// everything else must agree syntactically.
fn match_literals(pattern: &Literal, target: &Literal, subst: &mut Substitution) -> bool {
    if pattern.polarity != target.polarity {
        return false;
    }
    match_atoms(&pattern.atom, &target.atom, subst)
}

fn match_atoms(pattern: &Atom, target: &Atom, subst: &mut Substitution) -> bool {
    if pattern.predicate != target.predicate {
        return false;
    }
    pattern
        .args
        .iter()
        .zip(&target.args)
        .all(|(p, t)| match_terms(p, t, subst))
}

fn match_terms(pattern: &Term, target: &Term, subst: &mut Substitution) -> bool {
    match pattern {
        Term::Variable(v) => {
            if let Some(bound) = subst.get(v) {
                bound == target
            } else {
                subst.insert(v.clone(), target.clone());
                true
            }
        }
        Term::Constant(c1) => matches!(target, Term::Constant(c2) if c1 == c2),
        Term::Function(f1, args1) => match target {
            Term::Function(f2, args2) => {
                f1 == f2
                    && args1.len() == args2.len()
                    && args1
                        .iter()
                        .zip(args2)
                        .all(|(a1, a2)| match_terms(a1, a2, subst))
            }
            _ => false,
        },
    }
}
