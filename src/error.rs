//! Crate-wide error type.
//!
//! Three kinds of failure are kept apart: configuration errors (invalid
//! options, detected at construction), contract violations (structural
//! misuse such as `top_n(k)` with `k` beyond the population size) and
//! metric failures (the external oracle could not score a chromosome).
//! None of them is recovered from inside the search loop.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhaserError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Contract violation: {0}")]
    ContractViolation(String),

    #[error("Fitness metric failed for chromosome '{chromosome}': {reason}")]
    Metric { chromosome: String, reason: String },

    #[error("Unknown algorithm: '{0}' (expected 'random' or 'GEWEP')")]
    UnknownAlgorithm(String),

    #[error("Gene '{0}' is not part of the alphabet")]
    UnknownGene(char),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PhaserError>;
