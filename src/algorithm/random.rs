//! Fully random strategy.

use super::config::RandomOptions;
use super::pools::elite_count;
use crate::chromosome::operators::random_chromosome;
use crate::chromosome::Alphabet;
use crate::error::Result;
use crate::population::Population;
use log::debug;
use rand::Rng;

/// Keeps the elite and replaces everyone else with fresh random
/// chromosomes unrelated to the current population.
///
/// A large elite pool makes the strategy steady-state (few replacements
/// per round); a small one makes it generational.
#[derive(Debug, Clone)]
pub struct RandomAlgorithm {
    options: RandomOptions,
    alphabet: Alphabet,
}

impl RandomAlgorithm {
    /// # Errors
    /// [`crate::PhaserError::Configuration`] if `options` are invalid.
    pub fn new(options: RandomOptions, alphabet: Alphabet) -> Result<Self> {
        options.validate()?;
        Ok(Self { options, alphabet })
    }

    pub fn options(&self) -> &RandomOptions {
        &self.options
    }

    pub fn run_next_round<R: Rng>(&self, population: &Population, rng: &mut R) -> Result<Population> {
        let elite = elite_count(population.len(), self.options.elite_pool_size);
        let replaced = population.len() - elite;
        debug!("random round: keeping {elite}, replacing {replaced}");

        let survivors = population.top_n(elite)?.to_vec();
        let fresh = (0..replaced)
            .map(|_| {
                random_chromosome(
                    self.options.min_chromosome_length,
                    self.options.max_chromosome_length,
                    &self.alphabet,
                    rng,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        population.reassemble(survivors, fresh)
    }
}
