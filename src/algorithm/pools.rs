//! Pool-size arithmetic shared by the strategies.
//!
//! Fractions of the population are turned into counts by rounding to the
//! nearest integer, with ties resolved in favour of keeping more elite
//! individuals. The GEWEP pools are derived from cumulative boundaries, so
//! they always partition the population exactly.

use super::config::GewepOptions;

/// Absorbs float noise such as `0.1 + 0.2 != 0.3` at rounding ties.
const ROUNDING_TOLERANCE: f64 = 1e-9;

/// Rounds to nearest, ties up.
pub(crate) fn round_half_up(x: f64) -> usize {
    (x + 0.5 + ROUNDING_TOLERANCE).floor().max(0.0) as usize
}

/// Rounds to nearest, ties down.
pub(crate) fn round_half_down(x: f64) -> usize {
    (x - 0.5 - ROUNDING_TOLERANCE).ceil().max(0.0) as usize
}

/// Number of elite individuals kept by [`super::RandomAlgorithm`].
pub(crate) fn elite_count(population_size: usize, elite_pool_size: f64) -> usize {
    round_half_up(elite_pool_size * population_size as f64).min(population_size)
}

/// Rank ranges of the three GEWEP pools.
///
/// Over a population sorted best-first the layout is
/// `[elite | crossover | mutation]`. Crossover and mutation ranks are the
/// slots refilled with offspring each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusivePools {
    pub elite: usize,
    pub crossover: usize,
    pub mutation: usize,
}

impl ExclusivePools {
    pub fn compute(population_size: usize, options: &GewepOptions) -> Self {
        let n = population_size as f64;
        let replaced = round_half_down(
            (options.mutation_pool_size + options.crossover_pool_size) * n,
        )
        .min(population_size);
        let mutation = round_half_down(options.mutation_pool_size * n).min(replaced);

        Self {
            elite: population_size - replaced,
            crossover: replaced - mutation,
            mutation,
        }
    }

    pub fn total(&self) -> usize {
        self.elite + self.crossover + self.mutation
    }

    pub fn crossover_range(&self) -> std::ops::Range<usize> {
        self.elite..self.elite + self.crossover
    }

    pub fn mutation_range(&self) -> std::ops::Range<usize> {
        let start = self.elite + self.crossover;
        start..start + self.mutation
    }
}
