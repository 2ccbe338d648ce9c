//! Fitness-sorted population with memoised scores.
//!
//! A [`Population`] is always sorted ascending by fitness, ties kept in
//! insertion order. Scores are computed once per distinct chromosome:
//! individuals carried into the next round keep their fitness, and new
//! chromosomes equal to a current member reuse that member's score.

use crate::chromosome::operators::random_chromosome;
use crate::chromosome::{Alphabet, Chromosome};
use crate::error::{PhaserError, Result};
use crate::fitness::FitnessMetric;
use log::debug;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A chromosome paired with its cached fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub chromosome: Chromosome,
    pub fitness: usize,
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fitness: {}, optimisations: {}",
            self.fitness, self.chromosome
        )
    }
}

/// An ordered, fitness-sorted collection of individuals.
///
/// # Usage
///
/// ```
/// use std::sync::Arc;
/// use u_phaser::chromosome::Chromosome;
/// use u_phaser::fitness::FitnessMetric;
/// use u_phaser::population::Population;
///
/// struct Length;
/// impl FitnessMetric for Length {
///     fn evaluate(&self, c: &Chromosome) -> u_phaser::Result<usize> { Ok(c.len()) }
/// }
///
/// let population = Population::new(
///     Arc::new(Length),
///     vec!["abc".into(), "a".into(), "ab".into()],
/// ).unwrap();
/// assert_eq!(population.chromosome_at(0).unwrap().to_string(), "a");
/// assert_eq!(population.fitness_at(2).unwrap(), 3);
/// ```
#[derive(Clone)]
pub struct Population {
    metric: Arc<dyn FitnessMetric>,
    individuals: Vec<Individual>,
}

impl Population {
    /// Scores every chromosome and sorts.
    ///
    /// # Errors
    /// - [`PhaserError::ContractViolation`] for an empty chromosome list
    /// - any error the metric reports
    pub fn new(metric: Arc<dyn FitnessMetric>, chromosomes: Vec<Chromosome>) -> Result<Self> {
        let individuals = evaluate_chromosomes(metric.as_ref(), &[], chromosomes)?;
        Self::from_individuals(metric, individuals)
    }

    /// Builds a population of `size` random chromosomes with lengths in
    /// `[min_length, max_length]`.
    pub fn random<R: Rng>(
        metric: Arc<dyn FitnessMetric>,
        size: usize,
        min_length: usize,
        max_length: usize,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Result<Self> {
        let chromosomes = (0..size)
            .map(|_| random_chromosome(min_length, max_length, alphabet, rng))
            .collect::<Result<Vec<_>>>()?;
        Self::new(metric, chromosomes)
    }

    /// Builds the next population from individuals carried over unchanged
    /// and newly produced chromosomes.
    ///
    /// Survivors keep their fitness. An offspring equal to any member of
    /// `self` reuses that member's fitness; the rest are scored once per
    /// distinct value.
    pub fn reassemble(&self, survivors: Vec<Individual>, offspring: Vec<Chromosome>) -> Result<Self> {
        let mut individuals = survivors;
        individuals.extend(evaluate_chromosomes(
            self.metric.as_ref(),
            &self.individuals,
            offspring,
        )?);
        Self::from_individuals(Arc::clone(&self.metric), individuals)
    }

    /// Concatenates two populations scored by the same metric.
    ///
    /// # Errors
    /// [`PhaserError::ContractViolation`] if `other` uses a different
    /// metric instance.
    pub fn combine(self, other: Population) -> Result<Self> {
        if !Arc::ptr_eq(&self.metric, &other.metric) {
            return Err(PhaserError::ContractViolation(
                "cannot combine populations scored by different metrics".into(),
            ));
        }
        let mut individuals = self.individuals;
        individuals.extend(other.individuals);
        Self::from_individuals(self.metric, individuals)
    }

    fn from_individuals(metric: Arc<dyn FitnessMetric>, mut individuals: Vec<Individual>) -> Result<Self> {
        if individuals.is_empty() {
            return Err(PhaserError::ContractViolation(
                "a population needs at least one chromosome".into(),
            ));
        }
        individuals.sort_by_key(|individual| individual.fitness);
        Ok(Self {
            metric,
            individuals,
        })
    }

    /// The `k` best individuals, best first.
    pub fn top_n(&self, k: usize) -> Result<&[Individual]> {
        if k > self.individuals.len() {
            return Err(PhaserError::ContractViolation(format!(
                "requested top {k} of a population of {}",
                self.individuals.len()
            )));
        }
        Ok(&self.individuals[..k])
    }

    pub fn individual_at(&self, index: usize) -> Result<&Individual> {
        self.individuals.get(index).ok_or_else(|| {
            PhaserError::ContractViolation(format!(
                "index {index} out of range for a population of {}",
                self.individuals.len()
            ))
        })
    }

    pub fn chromosome_at(&self, index: usize) -> Result<&Chromosome> {
        Ok(&self.individual_at(index)?.chromosome)
    }

    pub fn fitness_at(&self, index: usize) -> Result<usize> {
        Ok(self.individual_at(index)?.fitness)
    }

    /// The lowest-fitness individual. Populations are never empty.
    pub fn best(&self) -> &Individual {
        &self.individuals[0]
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Always `false`: construction rejects empty populations.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn metric(&self) -> &Arc<dyn FitnessMetric> {
        &self.metric
    }
}

impl PartialEq for Population {
    fn eq(&self, other: &Self) -> bool {
        self.individuals == other.individuals
    }
}

impl fmt::Debug for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Population")
            .field("individuals", &self.individuals)
            .finish_non_exhaustive()
    }
}

/// One line per individual, best first.
impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for individual in &self.individuals {
            writeln!(f, "{individual}")?;
        }
        Ok(())
    }
}

/// Scores `chromosomes`, consulting `known` first and evaluating each
/// remaining distinct chromosome exactly once.
fn evaluate_chromosomes(
    metric: &dyn FitnessMetric,
    known: &[Individual],
    chromosomes: Vec<Chromosome>,
) -> Result<Vec<Individual>> {
    let mut cache: HashMap<Chromosome, usize> = known
        .iter()
        .map(|individual| (individual.chromosome.clone(), individual.fitness))
        .collect();

    let mut seen: HashSet<&Chromosome> = HashSet::new();
    let pending: Vec<Chromosome> = chromosomes
        .iter()
        .filter(|&chromosome| !cache.contains_key(chromosome) && seen.insert(chromosome))
        .cloned()
        .collect();

    debug!(
        "scoring {} of {} chromosomes ({} cached)",
        pending.len(),
        chromosomes.len(),
        chromosomes.len() - pending.len()
    );

    let scores = score_all(metric, &pending)?;
    cache.extend(pending.into_iter().zip(scores));

    Ok(chromosomes
        .into_iter()
        .map(|chromosome| {
            let fitness = cache[&chromosome];
            Individual {
                chromosome,
                fitness,
            }
        })
        .collect())
}

#[cfg(feature = "parallel")]
fn score_all(metric: &dyn FitnessMetric, chromosomes: &[Chromosome]) -> Result<Vec<usize>> {
    chromosomes
        .par_iter()
        .map(|chromosome| metric.evaluate(chromosome))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all(metric: &dyn FitnessMetric, chromosomes: &[Chromosome]) -> Result<Vec<usize>> {
    chromosomes
        .iter()
        .map(|chromosome| metric.evaluate(chromosome))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
