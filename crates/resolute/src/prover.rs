//! Top-level proving entry point and report formatting

use crate::config::ProverConfig;
use crate::error::Result;
use crate::fol::ClauseRole;
use crate::inference::Proof;
use crate::saturation::{SaturationResult, SaturationState};
use std::fmt;

/// Outcome of a proof attempt, formatted per the output contract:
/// the stored initial clauses, then either the refutation trace or the
/// no-contradiction notice.
#[derive(Debug, Clone)]
pub struct ProveReport {
    pub initial_clauses: Vec<(usize, String)>,
    pub proof: Option<Proof>,
}

/// Attempt to refute `kb` plus the already-negated goal clauses.
///
/// Both lists contain comma-separated clause strings. Finding no proof
/// is a normal outcome; only IO, JSON and grammar problems are errors.
pub fn prove(kb: &[String], negated: &[String], config: &ProverConfig) -> Result<ProveReport> {
    let mut state = SaturationState::new(config.clone());

    for text in kb {
        state.load_input(text, ClauseRole::Axiom)?;
    }
    for text in negated {
        state.load_input(text, ClauseRole::NegatedConjecture)?;
    }

    let initial_clauses = state
        .input_clauses()
        .map(|clause| (clause.id.expect("stored clause has an id"), clause.to_string()))
        .collect();

    let proof = match state.saturate() {
        SaturationResult::Refutation(proof) => Some(proof),
        SaturationResult::Saturated => None,
    };

    Ok(ProveReport {
        initial_clauses,
        proof,
    })
}

impl fmt::Display for ProveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial knowledge base clauses are:")?;
        for (id, clause) in &self.initial_clauses {
            writeln!(f, "Clause {}\t| {}", id, clause)?;
        }

        match &self.proof {
            Some(proof) => {
                writeln!(
                    f,
                    "Knowledge base contradicts, so inverse of the negated target clause is provable."
                )?;
                writeln!(f, "Prove by refutation resolution order will be shown.")?;
                write!(f, "{}", proof)
            }
            None => writeln!(f, "Knowledge base does not contradict."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn report_lists_clauses_with_ids() {
        let report = prove(
            &strings(&["p(A)"]),
            &strings(&["~q(A)"]),
            &ProverConfig::default(),
        )
        .unwrap();
        assert_eq!(
            report.to_string(),
            "Initial knowledge base clauses are:\n\
             Clause 0\t| [p(A)]\n\
             Clause 1\t| [~q(A)]\n\
             Knowledge base does not contradict.\n"
        );
    }

    #[test]
    fn parse_errors_surface_with_the_clause_text() {
        let err = prove(
            &strings(&["p(x"]),
            &strings(&[]),
            &ProverConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("p(x"));
    }
}
