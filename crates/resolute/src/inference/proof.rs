//! Proof reconstruction from the clause store

use super::derivation::Derivation;
use crate::fol::{Clause, Substitution};
use std::collections::HashSet;
use std::fmt;

/// A single derivation line of a refutation
#[derive(Debug, Clone)]
pub struct ProofStep {
    pub left: Clause,
    pub right: Clause,
    pub conclusion: Clause,
    pub substitution: Substitution,
}

impl fmt::Display for ProofStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} -> {} with substitution {}",
            self.left, self.right, self.conclusion, self.substitution
        )
    }
}

/// The refutation: derivation steps in topological order (parents
/// before children), ending with the empty clause.
#[derive(Debug, Clone)]
pub struct Proof {
    pub steps: Vec<ProofStep>,
    pub empty_clause_id: usize,
}

impl Proof {
    /// Walk back from the empty clause over parent ids and emit the
    /// ancestor derivations in topological order: a depth-first
    /// post-order, so a clause is emitted only after both its parents,
    /// even when a derived lemma feeds several branches. Input clauses
    /// have no derivation and contribute no lines.
    pub fn reconstruct(
        clauses: &[Clause],
        derivations: &[Option<Derivation>],
        empty_clause_id: usize,
    ) -> Proof {
        let mut visited: HashSet<usize> = HashSet::new();
        let mut order: Vec<usize> = Vec::new();
        let mut stack: Vec<(usize, bool)> = vec![(empty_clause_id, false)];

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                order.push(id);
                continue;
            }
            if !visited.insert(id) {
                continue;
            }
            if let Some(derivation) = &derivations[id] {
                stack.push((id, true));
                // left parent on top so it is visited first
                stack.push((derivation.right, false));
                stack.push((derivation.left, false));
            }
        }

        let steps = order
            .into_iter()
            .map(|id| {
                let derivation = derivations[id]
                    .as_ref()
                    .expect("derived clause has a derivation");
                ProofStep {
                    left: clauses[derivation.left].clone(),
                    right: clauses[derivation.right].clone(),
                    conclusion: clauses[id].clone(),
                    substitution: derivation.mgu.without_renamings(),
                }
            })
            .collect();

        Proof {
            steps,
            empty_clause_id,
        }
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        Ok(())
    }
}
