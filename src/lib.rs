//! Evolutionary search for compiler optimisation step orderings.
//!
//! An ordering of optimisation steps is encoded as a chromosome; a
//! population of orderings is evolved round by round towards lower cost
//! (e.g. code size) as measured by a pluggable oracle.
//!
//! - **Chromosomes**: gene sequences over a fixed step alphabet, with
//!   randomisation, deletion, addition and point-crossover operators.
//! - **Population**: fitness-sorted, with each distinct chromosome scored
//!   once.
//! - **Strategies**: a fully random strategy and a generational elitist
//!   strategy with exclusive elite, crossover and mutation pools (GEWEP).
//! - **Runner**: drives rounds and reports every population.
//!
//! # Architecture
//!
//! The crate knows nothing about what a step does. The compiler plugs in
//! through [`fitness::Program`] (or directly through
//! [`fitness::FitnessMetric`]); randomness is always an explicit
//! [`rand::Rng`] handle so a seed reproduces a run exactly.

pub mod algorithm;
pub mod chromosome;
pub mod config;
pub mod error;
pub mod fitness;
mod phaser;
pub mod population;
pub mod random;
pub mod runner;

pub use error::{PhaserError, Result};
pub use phaser::{FitnessMetricFactory, GeneticAlgorithmFactory, Phaser, PopulationFactory};
