//! Error types for the prover

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProverError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("parse error in clause '{clause}': {message}")]
    Parse { clause: String, message: String },
}

pub type Result<T> = std::result::Result<T, ProverError>;
