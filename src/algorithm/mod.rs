//! Round strategies.
//!
//! A strategy consumes a ranked [`Population`](crate::population::Population)
//! and produces the next one, always of the same size.
//!
//! # Key Types
//!
//! - [`GeneticAlgorithm`]: the closed set of strategies
//! - [`RandomAlgorithm`]: elite plus fresh random chromosomes
//! - [`GenerationalElitistWithExclusivePools`]: elite, crossover and
//!   mutation pools over disjoint rank ranges
//! - [`Algorithm`]: textual choice between the two
//!
//! # Pool sizes
//!
//! Fractions become counts by rounding to nearest; ties keep more elite.
//! See [`ExclusivePools`].

mod config;
mod gewep;
mod pools;
mod random;
mod types;

pub use config::{GewepOptions, RandomOptions};
pub use gewep::GenerationalElitistWithExclusivePools;
pub use pools::ExclusivePools;
pub use random::RandomAlgorithm;
pub use types::{Algorithm, GeneticAlgorithm};
