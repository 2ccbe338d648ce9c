//! Strategy selection.

use super::gewep::GenerationalElitistWithExclusivePools;
use super::random::RandomAlgorithm;
use crate::error::{PhaserError, Result};
use crate::population::Population;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The textual algorithm choice used in configuration.
///
/// # Examples
///
/// ```
/// use u_phaser::algorithm::Algorithm;
///
/// assert_eq!("GEWEP".parse::<Algorithm>().unwrap(), Algorithm::Gewep);
/// assert_eq!(Algorithm::Random.to_string(), "random");
/// assert!("annealing".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "random")]
    Random,
    #[default]
    #[serde(rename = "GEWEP")]
    Gewep,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Random => "random",
            Algorithm::Gewep => "GEWEP",
        }
    }
}

impl FromStr for Algorithm {
    type Err = PhaserError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "random" => Ok(Algorithm::Random),
            "GEWEP" => Ok(Algorithm::Gewep),
            other => Err(PhaserError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured strategy.
///
/// The set of strategies is closed; the runner only ever calls
/// [`run_next_round`](Self::run_next_round).
#[derive(Debug, Clone)]
pub enum GeneticAlgorithm {
    Random(RandomAlgorithm),
    Gewep(GenerationalElitistWithExclusivePools),
}

impl GeneticAlgorithm {
    /// Runs one round. The result has the same size as `population` and
    /// is sorted ascending by fitness.
    pub fn run_next_round<R: Rng>(&self, population: &Population, rng: &mut R) -> Result<Population> {
        match self {
            GeneticAlgorithm::Random(algorithm) => algorithm.run_next_round(population, rng),
            GeneticAlgorithm::Gewep(algorithm) => algorithm.run_next_round(population, rng),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            GeneticAlgorithm::Random(_) => Algorithm::Random,
            GeneticAlgorithm::Gewep(_) => Algorithm::Gewep,
        }
    }
}

impl From<RandomAlgorithm> for GeneticAlgorithm {
    fn from(algorithm: RandomAlgorithm) -> Self {
        GeneticAlgorithm::Random(algorithm)
    }
}

impl From<GenerationalElitistWithExclusivePools> for GeneticAlgorithm {
    fn from(algorithm: GenerationalElitistWithExclusivePools) -> Self {
        GeneticAlgorithm::Gewep(algorithm)
    }
}
