//! Chromosome encoding of optimisation step orderings.
//!
//! A [`Chromosome`] is an ordered sequence of [`Gene`]s, each gene being
//! one optimisation step drawn from a fixed [`Alphabet`]. The search treats
//! steps as opaque symbols.
//!
//! # Submodules
//!
//! - [`operators`]: construction, mutation and crossover operators

pub mod operators;
mod types;

pub use types::{Alphabet, Chromosome, Gene};
