//! Component factories and the top-level run.
//!
//! The factories turn a [`PhaserConfig`] into the search components;
//! [`Phaser::run`] wires them together around a caller-supplied program.

use crate::algorithm::{
    Algorithm, GenerationalElitistWithExclusivePools, GeneticAlgorithm, GewepOptions,
    RandomAlgorithm, RandomOptions,
};
use crate::chromosome::Alphabet;
use crate::config::PhaserConfig;
use crate::error::Result;
use crate::fitness::{FitnessMetric, Program, ProgramSize};
use crate::population::Population;
use crate::random::create_rng;
use crate::runner::{AlgorithmRunner, RunnerOptions};
use log::info;
use rand::Rng;
use std::io::Write;
use std::sync::Arc;

/// Builds a validated [`GeneticAlgorithm`] with the standard tuning for
/// the chosen strategy.
///
/// - **Random**: one elite individual (`1 / population_size`).
/// - **GEWEP**: a quarter of the population each for mutation and
///   crossover, randomisation in 90% of mutations, deletion and addition
///   equally likely otherwise, and on average one affected gene per
///   maximum-length chromosome.
pub struct GeneticAlgorithmFactory;

impl GeneticAlgorithmFactory {
    pub fn build(
        algorithm: Algorithm,
        population_size: usize,
        min_chromosome_length: usize,
        max_chromosome_length: usize,
        alphabet: Alphabet,
    ) -> Result<GeneticAlgorithm> {
        match algorithm {
            Algorithm::Random => {
                let options = RandomOptions {
                    elite_pool_size: 1.0 / population_size as f64,
                    min_chromosome_length,
                    max_chromosome_length,
                };
                Ok(RandomAlgorithm::new(options, alphabet)?.into())
            }
            Algorithm::Gewep => {
                let gene_chance = 1.0 / max_chromosome_length as f64;
                let options = GewepOptions {
                    mutation_pool_size: 0.25,
                    crossover_pool_size: 0.25,
                    randomisation_chance: 0.9,
                    deletion_vs_addition_chance: 0.5,
                    percent_genes_to_randomise: gene_chance,
                    percent_genes_to_add_or_delete: gene_chance,
                };
                Ok(GenerationalElitistWithExclusivePools::new(options, alphabet)?.into())
            }
        }
    }
}

pub struct FitnessMetricFactory;

impl FitnessMetricFactory {
    pub fn build<P: Program + 'static>(program: P, repetition_count: usize) -> Arc<dyn FitnessMetric> {
        Arc::new(ProgramSize::new(program, repetition_count))
    }
}

pub struct PopulationFactory;

impl PopulationFactory {
    /// Random initial population shaped by `config`.
    pub fn build<R: Rng>(
        metric: Arc<dyn FitnessMetric>,
        config: &PhaserConfig,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Result<Population> {
        Population::random(
            metric,
            config.population_size,
            config.min_chromosome_length,
            config.max_chromosome_length,
            alphabet,
            rng,
        )
    }
}

/// Runs a complete search over one program.
pub struct Phaser;

impl Phaser {
    /// Validates `config`, builds every component and runs the rounds,
    /// reporting to `output`. Returns the final population.
    ///
    /// Without `max_rounds` this only returns on error.
    pub fn run<P: Program + 'static, W: Write>(
        config: &PhaserConfig,
        program: P,
        output: W,
    ) -> Result<Population> {
        config.validate()?;
        let alphabet = config.parsed_alphabet()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        info!("random seed: {seed}");
        let mut rng = create_rng(seed);

        let metric = FitnessMetricFactory::build(program, config.repetition_count);
        let population = PopulationFactory::build(metric, config, &alphabet, &mut rng)?;
        let algorithm = GeneticAlgorithmFactory::build(
            config.algorithm,
            config.population_size,
            config.min_chromosome_length,
            config.max_chromosome_length,
            alphabet,
        )?;
        info!(
            "starting {} search: population {}, max rounds {:?}",
            config.algorithm, config.population_size, config.max_rounds
        );

        let options = RunnerOptions {
            max_rounds: config.max_rounds,
        };
        let mut runner = AlgorithmRunner::new(population, options, output);
        runner.run(&algorithm, &mut rng)?;

        let (population, _) = runner.into_parts();
        Ok(population)
    }
}
