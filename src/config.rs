//! Run configuration.
//!
//! [`PhaserConfig`] is the whole external configuration surface: which
//! strategy to run, population and chromosome shape, round budget, metric
//! smoothing and seed. It is read from TOML; every field is optional and
//! falls back to its default.
//!
//! ```toml
//! algorithm = "GEWEP"
//! population_size = 20
//! min_chromosome_length = 12
//! max_chromosome_length = 30
//! max_rounds = 100
//! repetition_count = 5
//! seed = 42
//! ```

use crate::algorithm::Algorithm;
use crate::chromosome::Alphabet;
use crate::error::{PhaserError, Result};
use crate::fitness::DEFAULT_REPETITION_COUNT;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Abbreviations of the compiler's optimisation steps.
pub const DEFAULT_ALPHABET: &str = "flcCUnDvejsxIOoighTLMrmVatud";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaserConfig {
    pub algorithm: Algorithm,

    /// Number of chromosomes, constant for the whole run.
    pub population_size: usize,

    /// Length bounds for randomly generated chromosomes.
    pub min_chromosome_length: usize,
    pub max_chromosome_length: usize,

    /// `None` runs until the process is stopped.
    pub max_rounds: Option<usize>,

    /// Passes of the step sequence before measuring the program.
    pub repetition_count: usize,

    /// `None` picks a random seed at startup (and logs it).
    pub seed: Option<u64>,

    /// One symbol per available optimisation step.
    pub alphabet: String,
}

impl Default for PhaserConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Gewep,
            population_size: 20,
            min_chromosome_length: 12,
            max_chromosome_length: 30,
            max_rounds: None,
            repetition_count: DEFAULT_REPETITION_COUNT,
            seed: None,
            alphabet: DEFAULT_ALPHABET.to_string(),
        }
    }
}

impl PhaserConfig {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_chromosome_length(mut self, min: usize, max: usize) -> Self {
        self.min_chromosome_length = min;
        self.max_chromosome_length = max;
        self
    }

    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    pub fn with_repetition_count(mut self, count: usize) -> Self {
        self.repetition_count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_alphabet(mut self, alphabet: &str) -> Self {
        self.alphabet = alphabet.to_string();
        self
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: PhaserConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn parsed_alphabet(&self) -> Result<Alphabet> {
        self.alphabet.parse()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(PhaserError::Configuration(
                "population_size must be at least 1".into(),
            ));
        }
        if self.max_chromosome_length == 0 {
            return Err(PhaserError::Configuration(
                "max_chromosome_length must be at least 1".into(),
            ));
        }
        if self.min_chromosome_length > self.max_chromosome_length {
            return Err(PhaserError::Configuration(format!(
                "min_chromosome_length ({}) must not exceed max_chromosome_length ({})",
                self.min_chromosome_length, self.max_chromosome_length
            )));
        }
        if self.repetition_count == 0 {
            return Err(PhaserError::Configuration(
                "repetition_count must be at least 1".into(),
            ));
        }
        self.parsed_alphabet()?;
        Ok(())
    }
}
