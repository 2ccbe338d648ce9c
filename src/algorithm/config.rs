//! Strategy options.
//!
//! Options are plain records. Setters store values as given; nothing is
//! clamped. [`RandomOptions::validate`] and [`GewepOptions::validate`] are
//! the single validation entry points and are run by the strategy
//! constructors.

use crate::error::{PhaserError, Result};

/// Options for [`super::RandomAlgorithm`].
///
/// # Examples
///
/// ```
/// use u_phaser::algorithm::RandomOptions;
///
/// let options = RandomOptions::default().with_elite_pool_size(0.5);
/// assert!(options.is_valid());
/// assert!(!options.with_elite_pool_size(1.5).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomOptions {
    /// Fraction of the population kept as the elite (0.0–1.0).
    ///
    /// 0.0 replaces every individual each round; 1.0 changes nothing.
    pub elite_pool_size: f64,

    /// Minimum length of newly generated chromosomes.
    pub min_chromosome_length: usize,

    /// Maximum length of newly generated chromosomes.
    pub max_chromosome_length: usize,
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self {
            elite_pool_size: 0.05,
            min_chromosome_length: 12,
            max_chromosome_length: 30,
        }
    }
}

impl RandomOptions {
    pub fn with_elite_pool_size(mut self, fraction: f64) -> Self {
        self.elite_pool_size = fraction;
        self
    }

    pub fn with_chromosome_length(mut self, min: usize, max: usize) -> Self {
        self.min_chromosome_length = min;
        self.max_chromosome_length = max;
        self
    }

    /// Validates the options.
    ///
    /// Returns [`PhaserError::Configuration`] describing the first
    /// offending field.
    pub fn validate(&self) -> Result<()> {
        check_fraction("elite_pool_size", self.elite_pool_size)?;
        if self.min_chromosome_length > self.max_chromosome_length {
            return Err(PhaserError::Configuration(format!(
                "min_chromosome_length ({}) must not exceed max_chromosome_length ({})",
                self.min_chromosome_length, self.max_chromosome_length
            )));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Options for [`super::GenerationalElitistWithExclusivePools`].
///
/// The mutation and crossover pools are taken from the bottom of the
/// ranking; whatever is left is the elite. Their sizes must sum to at most
/// 1.0.
///
/// # Examples
///
/// ```
/// use u_phaser::algorithm::GewepOptions;
///
/// let options = GewepOptions::default()
///     .with_mutation_pool_size(0.5)
///     .with_crossover_pool_size(0.5);
/// assert!(options.is_valid());
///
/// let options = options.with_mutation_pool_size(0.6).with_crossover_pool_size(0.6);
/// assert!(!options.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GewepOptions {
    /// Fraction of the population regenerated by mutation each round.
    pub mutation_pool_size: f64,

    /// Fraction of the population regenerated by crossover each round.
    pub crossover_pool_size: f64,

    /// Chance of picking gene randomisation as the mutation.
    pub randomisation_chance: f64,

    /// Chance of picking deletion over addition when randomisation was
    /// not picked.
    pub deletion_vs_addition_chance: f64,

    /// Per-gene chance used by gene randomisation.
    pub percent_genes_to_randomise: f64,

    /// Per-gene chance used by gene addition and deletion.
    pub percent_genes_to_add_or_delete: f64,
}

impl Default for GewepOptions {
    fn default() -> Self {
        Self {
            mutation_pool_size: 0.25,
            crossover_pool_size: 0.25,
            randomisation_chance: 0.9,
            deletion_vs_addition_chance: 0.5,
            percent_genes_to_randomise: 1.0 / 30.0,
            percent_genes_to_add_or_delete: 1.0 / 30.0,
        }
    }
}

impl GewepOptions {
    pub fn with_mutation_pool_size(mut self, fraction: f64) -> Self {
        self.mutation_pool_size = fraction;
        self
    }

    pub fn with_crossover_pool_size(mut self, fraction: f64) -> Self {
        self.crossover_pool_size = fraction;
        self
    }

    pub fn with_randomisation_chance(mut self, chance: f64) -> Self {
        self.randomisation_chance = chance;
        self
    }

    pub fn with_deletion_vs_addition_chance(mut self, chance: f64) -> Self {
        self.deletion_vs_addition_chance = chance;
        self
    }

    pub fn with_percent_genes_to_randomise(mut self, chance: f64) -> Self {
        self.percent_genes_to_randomise = chance;
        self
    }

    pub fn with_percent_genes_to_add_or_delete(mut self, chance: f64) -> Self {
        self.percent_genes_to_add_or_delete = chance;
        self
    }

    /// Validates the options.
    pub fn validate(&self) -> Result<()> {
        check_fraction("mutation_pool_size", self.mutation_pool_size)?;
        check_fraction("crossover_pool_size", self.crossover_pool_size)?;
        check_fraction("randomisation_chance", self.randomisation_chance)?;
        check_fraction("deletion_vs_addition_chance", self.deletion_vs_addition_chance)?;
        check_fraction("percent_genes_to_randomise", self.percent_genes_to_randomise)?;
        check_fraction(
            "percent_genes_to_add_or_delete",
            self.percent_genes_to_add_or_delete,
        )?;
        if self.mutation_pool_size + self.crossover_pool_size > 1.0 {
            return Err(PhaserError::Configuration(format!(
                "mutation_pool_size ({}) + crossover_pool_size ({}) must be <= 1.0",
                self.mutation_pool_size, self.crossover_pool_size
            )));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// NaN fails the range check too.
fn check_fraction(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(PhaserError::Configuration(format!(
            "{name} must be within [0.0, 1.0], got {value}"
        )))
    }
}
