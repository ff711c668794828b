//! Level-saturation search over a monotone clause store

use super::subsumption::{strictly_subsumes, subsumes};
use crate::config::ProverConfig;
use crate::error::Result;
use crate::fol::{Clause, ClauseRole};
use crate::inference::{resolve, Derivation, FreshVariables, Proof};
use crate::parser::parse_clause;
use log::{debug, info};

/// Result of a saturation run
#[derive(Debug, Clone)]
pub enum SaturationResult {
    /// Empty clause derived: the knowledge base contradicts
    Refutation(Proof),
    /// No new clauses (or a resource limit): no proof
    Saturated,
}

enum Insertion {
    Inserted(usize),
    Rejected,
}

/// The clause store and the breadth-first saturation driver.
///
/// Clauses are appended in derivation order and never mutated; deleted
/// (backward-subsumed) clauses stay in the store for provenance but are
/// excluded from pair selection. The frontier marker separates clauses
/// that have already been paired with each other from newer ones.
pub struct SaturationState {
    clauses: Vec<Clause>,
    derivations: Vec<Option<Derivation>>,
    live: Vec<bool>,
    marker: usize,
    fresh: FreshVariables,
    config: ProverConfig,
}

impl SaturationState {
    pub fn new(config: ProverConfig) -> Self {
        SaturationState {
            clauses: Vec::new(),
            derivations: Vec::new(),
            live: Vec::new(),
            marker: 0,
            fresh: FreshVariables::new(),
            config,
        }
    }

    /// Parse an input clause string and push it through the insertion
    /// gate. Tautologies and subsumed clauses are dropped silently.
    pub fn load_input(&mut self, text: &str, role: ClauseRole) -> Result<()> {
        let mut clause = parse_clause(text)?;
        clause.role = role;
        self.try_insert(clause, None);
        Ok(())
    }

    /// Stored input clauses, in insertion order
    pub fn input_clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses
            .iter()
            .filter(|c| c.role != ClauseRole::Derived)
    }

    /// All stored clauses, including deleted ones
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Insert a clause unless it is a tautology or subsumed by a live
    /// clause; on insertion, delete every live clause it strictly
    /// subsumes.
    fn try_insert(&mut self, mut clause: Clause, derivation: Option<Derivation>) -> Insertion {
        if clause.is_tautology() {
            debug!("rejected tautology {}", clause);
            return Insertion::Rejected;
        }

        for (id, existing) in self.clauses.iter().enumerate() {
            if self.live[id] && subsumes(existing, &clause) {
                debug!("rejected {}: subsumed by clause {}", clause, id);
                return Insertion::Rejected;
            }
        }

        let id = self.clauses.len();
        clause.id = Some(id);

        for other in 0..self.clauses.len() {
            if self.live[other] && strictly_subsumes(&clause, &self.clauses[other]) {
                debug!("clause {} deletes subsumed clause {}", id, other);
                self.live[other] = false;
            }
        }

        debug!("inserted clause {}: {}", id, clause);
        self.clauses.push(clause);
        self.derivations.push(derivation);
        self.live.push(true);
        Insertion::Inserted(id)
    }

    /// Run breadth-first level saturation until the empty clause is
    /// derived, no level adds a clause, or a configured limit is hit.
    ///
    /// Each level pairs every clause with every newer clause at or past
    /// the frontier marker, in lexicographic (left id, right id) order;
    /// resolvents enter the store at the next level.
    pub fn saturate(&mut self) -> SaturationResult {
        let mut level = 0;

        loop {
            level += 1;
            if self.config.max_levels != 0 && level > self.config.max_levels {
                debug!("level limit {} reached", self.config.max_levels);
                return SaturationResult::Saturated;
            }

            let frontier_end = self.clauses.len();
            let mut inserted_any = false;
            debug!(
                "level {}: {} clauses, frontier starts at {}",
                level, frontier_end, self.marker
            );

            for left in 0..frontier_end {
                for right in (left + 1).max(self.marker)..frontier_end {
                    if !self.live[left] || !self.live[right] {
                        continue;
                    }

                    let resolvents = resolve(
                        &self.clauses[left],
                        left,
                        &self.clauses[right],
                        right,
                        &mut self.fresh,
                        self.config.occurs_check,
                    );

                    for result in resolvents {
                        let mut conclusion = result.conclusion;
                        conclusion.level = level;

                        if let Insertion::Inserted(id) =
                            self.try_insert(conclusion, Some(result.derivation))
                        {
                            inserted_any = true;

                            if self.clauses[id].is_empty() {
                                info!("empty clause {} derived at level {}", id, level);
                                let proof =
                                    Proof::reconstruct(&self.clauses, &self.derivations, id);
                                return SaturationResult::Refutation(proof);
                            }

                            if self.config.max_clauses != 0
                                && self.clauses.len() >= self.config.max_clauses
                            {
                                debug!("clause limit {} reached", self.config.max_clauses);
                                return SaturationResult::Saturated;
                            }
                        }
                    }
                }
            }

            if !inserted_any {
                info!("saturated after level {}", level);
                return SaturationResult::Saturated;
            }
            self.marker = frontier_end;
        }
    }
}
