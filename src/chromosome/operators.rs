//! Genetic operators over variable-length gene sequences.
//!
//! Unlike permutation operators, these may change a chromosome's length
//! and may produce the empty chromosome. Every operator is pure apart from
//! the random source it is handed.
//!
//! # Construction
//!
//! - [`random_chromosome`]: uniform length in `[min, max]`, uniform genes
//!
//! # Mutation Operators
//!
//! - [`gene_randomisation`]: replace each gene with probability `chance`
//! - [`gene_deletion`]: drop each gene with probability `chance`
//! - [`gene_addition`]: insert a random gene before each position with
//!   probability `chance`
//!
//! # Crossover Operators
//!
//! - [`random_point_crossover`]: one independent cut per parent
//! - [`point_crossover`]: the same with explicit cut points

use super::types::{Alphabet, Chromosome};
use crate::error::{PhaserError, Result};
use rand::Rng;

// ============================================================================
// Construction
// ============================================================================

/// Generates a chromosome whose length is uniform in
/// `[min_length, max_length]` and whose genes are uniform over `alphabet`.
///
/// # Errors
/// [`PhaserError::ContractViolation`] if `min_length > max_length`.
pub fn random_chromosome<R: Rng>(
    min_length: usize,
    max_length: usize,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Result<Chromosome> {
    if min_length > max_length {
        return Err(PhaserError::ContractViolation(format!(
            "min_length ({min_length}) exceeds max_length ({max_length})"
        )));
    }
    let length = rng.random_range(min_length..=max_length);
    let genes = (0..length).map(|_| alphabet.random_gene(rng)).collect();
    Ok(Chromosome::new(genes))
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Replaces each gene, independently with probability `chance`, by a
/// uniform draw from `alphabet`. The draw may pick the same gene again.
///
/// `chance` must lie in `[0, 1]`.
pub fn gene_randomisation<R: Rng>(
    chromosome: &Chromosome,
    chance: f64,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Chromosome {
    let genes = chromosome
        .genes()
        .iter()
        .map(|&gene| {
            if rng.random_bool(chance) {
                alphabet.random_gene(rng)
            } else {
                gene
            }
        })
        .collect();
    Chromosome::new(genes)
}

/// Drops each gene independently with probability `chance`.
///
/// # Panics
/// Panics if `chance` is outside `[0, 1]` and the chromosome is non-empty.
pub fn gene_deletion<R: Rng>(chromosome: &Chromosome, chance: f64, rng: &mut R) -> Chromosome {
    let genes = chromosome
        .genes()
        .iter()
        .copied()
        .filter(|_| !rng.random_bool(chance))
        .collect();
    Chromosome::new(genes)
}

/// Walks the original genes and, before each one, inserts a random gene
/// with probability `chance`.
///
/// Expected growth is `chance * len`; an empty chromosome stays empty.
///
/// # Panics
/// Panics if `chance` is outside `[0, 1]` and the chromosome is non-empty.
pub fn gene_addition<R: Rng>(
    chromosome: &Chromosome,
    chance: f64,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Chromosome {
    let mut genes = Vec::with_capacity(chromosome.len() * 2);
    for &gene in chromosome.genes() {
        if rng.random_bool(chance) {
            genes.push(alphabet.random_gene(rng));
        }
        genes.push(gene);
    }
    Chromosome::new(genes)
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover with one cut per parent.
///
/// Each cut is drawn uniformly from `[0, len]` of its own parent, so
/// parents of different lengths are fine and a cut at either end is a
/// legal outcome.
///
/// Returns `(a[..cut_a] + b[cut_b..], b[..cut_b] + a[cut_a..])`.
pub fn random_point_crossover<R: Rng>(
    parent_a: &Chromosome,
    parent_b: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let cut_a = rng.random_range(0..=parent_a.len());
    let cut_b = rng.random_range(0..=parent_b.len());
    splice(parent_a, parent_b, cut_a, cut_b)
}

/// Crossover at explicit cut points.
///
/// `child_a` has length `cut_a + (len_b - cut_b)` and `child_b` has
/// length `cut_b + (len_a - cut_a)`.
///
/// # Errors
/// [`PhaserError::ContractViolation`] if a cut lies past its parent's end.
pub fn point_crossover(
    parent_a: &Chromosome,
    parent_b: &Chromosome,
    cut_a: usize,
    cut_b: usize,
) -> Result<(Chromosome, Chromosome)> {
    if cut_a > parent_a.len() || cut_b > parent_b.len() {
        return Err(PhaserError::ContractViolation(format!(
            "crossover cuts ({cut_a}, {cut_b}) out of range for lengths ({}, {})",
            parent_a.len(),
            parent_b.len()
        )));
    }
    Ok(splice(parent_a, parent_b, cut_a, cut_b))
}

fn splice(
    parent_a: &Chromosome,
    parent_b: &Chromosome,
    cut_a: usize,
    cut_b: usize,
) -> (Chromosome, Chromosome) {
    let (head_a, tail_a) = parent_a.genes().split_at(cut_a);
    let (head_b, tail_b) = parent_b.genes().split_at(cut_b);

    let child_a = head_a.iter().chain(tail_b).copied().collect();
    let child_b = head_b.iter().chain(tail_a).copied().collect();

    (Chromosome::new(child_a), Chromosome::new(child_b))
}

// ============================================================================
// Tests
// ============================================================================
