//! JSON input document for proof problems

use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A proof problem: knowledge-base clauses plus the already-negated
/// goal clauses, each as a comma-separated clause string. Both keys are
/// required; either list may be empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemJson {
    pub knowledge_base: Vec<String>,
    pub negated_theorem_predicates: Vec<String>,
}

/// Read and decode a problem file
pub fn read_problem(path: &Path) -> Result<ProblemJson> {
    let content = fs::read_to_string(path)?;
    let problem = serde_json::from_str(&content)?;
    Ok(problem)
}
