//! Generational elitist strategy with exclusive pools (GEWEP).
//!
//! Each round splits the ranked population into three disjoint pools:
//!
//! 1. **Elite** (best): copied unchanged
//! 2. **Crossover** (next worst): slots refilled with children of elite pairs
//! 3. **Mutation** (worst): slots refilled with mutated copies of elite members
//!
//! Only the elite reproduces. The crossover and mutation pools are
//! discarded and refilled, so no individual is counted twice and the elite
//! guarantees the best fitness never regresses. When the elite is empty
//! the whole ranked population serves as parents.

use super::config::GewepOptions;
use super::pools::ExclusivePools;
use crate::chromosome::operators::{
    gene_addition, gene_deletion, gene_randomisation, random_point_crossover,
};
use crate::chromosome::{Alphabet, Chromosome};
use crate::error::Result;
use crate::population::{Individual, Population};
use log::debug;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct GenerationalElitistWithExclusivePools {
    options: GewepOptions,
    alphabet: Alphabet,
}

impl GenerationalElitistWithExclusivePools {
    /// # Errors
    /// [`crate::PhaserError::Configuration`] if `options` are invalid.
    pub fn new(options: GewepOptions, alphabet: Alphabet) -> Result<Self> {
        options.validate()?;
        Ok(Self { options, alphabet })
    }

    pub fn options(&self) -> &GewepOptions {
        &self.options
    }

    pub fn run_next_round<R: Rng>(&self, population: &Population, rng: &mut R) -> Result<Population> {
        let pools = ExclusivePools::compute(population.len(), &self.options);
        debug!(
            "GEWEP round: elite {}, crossover {}, mutation {}",
            pools.elite, pools.crossover, pools.mutation
        );

        let ranked = population.individuals();
        let survivors = ranked[..pools.elite].to_vec();
        let parents = if pools.elite > 0 {
            &ranked[..pools.elite]
        } else {
            ranked
        };

        let mut offspring = self.crossover_offspring(parents, pools.crossover, rng);
        offspring.extend(
            parents
                .iter()
                .cycle()
                .take(pools.mutation)
                .map(|parent| self.mutate(&parent.chromosome, rng)),
        );

        population.reassemble(survivors, offspring)
    }

    /// Produces `count` children from `parents` (best first).
    ///
    /// Parents are paired by rank, `(0, 1), (2, 3), ...`, wrapping around
    /// when the pairs run out, and both children of a pair are kept. If
    /// `count` is odd the last pair contributes only its first child.
    fn crossover_offspring<R: Rng>(
        &self,
        parents: &[Individual],
        count: usize,
        rng: &mut R,
    ) -> Vec<Chromosome> {
        let mut children = Vec::with_capacity(count);
        let mut next = 0;
        while children.len() < count {
            let a = &parents[next % parents.len()].chromosome;
            let b = &parents[(next + 1) % parents.len()].chromosome;
            next += 2;

            let (first, second) = random_point_crossover(a, b, rng);
            children.push(first);
            if children.len() < count {
                children.push(second);
            }
        }
        children
    }

    fn mutate<R: Rng>(&self, chromosome: &Chromosome, rng: &mut R) -> Chromosome {
        let o = &self.options;
        if rng.random_bool(o.randomisation_chance) {
            gene_randomisation(chromosome, o.percent_genes_to_randomise, &self.alphabet, rng)
        } else if rng.random_bool(o.deletion_vs_addition_chance) {
            gene_deletion(chromosome, o.percent_genes_to_add_or_delete, rng)
        } else {
            gene_addition(chromosome, o.percent_genes_to_add_or_delete, &self.alphabet, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhaserError;
    use crate::fitness::FitnessMetric;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use std::sync::Arc;

    struct Length;

    impl FitnessMetric for Length {
        fn evaluate(&self, chromosome: &Chromosome) -> Result<usize> {
            Ok(chromosome.len())
        }
    }

    fn abc() -> Alphabet {
        "abc".parse().unwrap()
    }

    fn population(symbols: &[&str]) -> Population {
        Population::new(Arc::new(Length), symbols.iter().map(|&s| s.into()).collect()).unwrap()
    }

    fn gewep(options: GewepOptions) -> GenerationalElitistWithExclusivePools {
        GenerationalElitistWithExclusivePools::new(options, abc()).unwrap()
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = GewepOptions::default()
            .with_mutation_pool_size(0.6)
            .with_crossover_pool_size(0.6);
        assert!(matches!(
            GenerationalElitistWithExclusivePools::new(options, abc()),
            Err(PhaserError::Configuration(_))
        ));
    }

    #[test]
    fn test_elite_preserved() {
        let before = population(&["a", "ab", "abc", "abca", "abcab", "abcabc", "abcabca", "abcabcab"]);
        let options = GewepOptions::default()
            .with_mutation_pool_size(0.25)
            .with_crossover_pool_size(0.25)
            .with_randomisation_chance(0.0)
            .with_deletion_vs_addition_chance(0.0)
            .with_percent_genes_to_add_or_delete(1.0);
        let mut rng = create_rng(42);
        let after = gewep(options).run_next_round(&before, &mut rng).unwrap();

        assert_eq!(after.len(), 8);
        let kept: Vec<&Chromosome> = after.individuals().iter().map(|i| &i.chromosome).collect();
        for elite in before.top_n(4).unwrap() {
            assert!(kept.contains(&&elite.chromosome), "elite {} lost", elite.chromosome);
        }
    }

    #[test]
    fn test_no_pools_changes_nothing() {
        let before = population(&["abc", "a", "bb", "cacb"]);
        let options = GewepOptions::default()
            .with_mutation_pool_size(0.0)
            .with_crossover_pool_size(0.0);
        let mut rng = create_rng(42);
        let after = gewep(options).run_next_round(&before, &mut rng).unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn test_full_deletion_pool() {
        // Everything mutated, always by deleting every gene.
        let before = population(&["abc", "ab", "cab", "bcab"]);
        let options = GewepOptions::default()
            .with_mutation_pool_size(1.0)
            .with_crossover_pool_size(0.0)
            .with_randomisation_chance(0.0)
            .with_deletion_vs_addition_chance(1.0)
            .with_percent_genes_to_add_or_delete(1.0);
        let mut rng = create_rng(42);
        let after = gewep(options).run_next_round(&before, &mut rng).unwrap();
        assert_eq!(after.len(), 4);
        assert!(after.individuals().iter().all(|i| i.chromosome.is_empty()));
    }

    #[test]
    fn test_full_addition_pool() {
        let before = population(&["a", "ab"]);
        let options = GewepOptions::default()
            .with_mutation_pool_size(1.0)
            .with_crossover_pool_size(0.0)
            .with_randomisation_chance(0.0)
            .with_deletion_vs_addition_chance(0.0)
            .with_percent_genes_to_add_or_delete(1.0);
        let mut rng = create_rng(42);
        let after = gewep(options).run_next_round(&before, &mut rng).unwrap();
        assert_eq!(after.fitness_at(0).unwrap(), 2);
        assert_eq!(after.fitness_at(1).unwrap(), 4);
    }

    #[test]
    fn test_crossover_pool_conserves_genes() {
        // Crossover only shuffles material between pairs: total length is unchanged.
        let before = population(&["a", "bb", "ccc", "aaaa"]);
        let options = GewepOptions::default()
            .with_mutation_pool_size(0.0)
            .with_crossover_pool_size(1.0);
        let mut rng = create_rng(42);
        let after = gewep(options).run_next_round(&before, &mut rng).unwrap();
        let total: usize = after.individuals().iter().map(|i| i.fitness).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn test_odd_crossover_pool_keeps_size() {
        let before = population(&["a", "ab", "abc", "abca", "abcab", "abcabc"]);
        let options = GewepOptions::default()
            .with_mutation_pool_size(0.0)
            .with_crossover_pool_size(0.5);
        let mut rng = create_rng(3);
        let after = gewep(options).run_next_round(&before, &mut rng).unwrap();
        assert_eq!(after.len(), 6);
    }

    #[test]
    fn test_mutation_slots_refilled_from_elite() {
        // Deletion at gene chance 0 leaves each parent unchanged, so every
        // refilled slot must be a copy of an elite member.
        let before = population(&["a", "b", "cccc", "dddd"]);
        let options = GewepOptions::default()
            .with_mutation_pool_size(0.5)
            .with_crossover_pool_size(0.0)
            .with_randomisation_chance(0.0)
            .with_deletion_vs_addition_chance(1.0)
            .with_percent_genes_to_add_or_delete(0.0);
        let mut rng = create_rng(42);
        let after = gewep(options).run_next_round(&before, &mut rng).unwrap();

        let kept: Vec<String> = after.individuals().iter().map(|i| i.chromosome.to_string()).collect();
        assert_eq!(kept.len(), 4);
        assert!(kept.iter().all(|c| c == "a" || c == "b"), "got {kept:?}");
    }

    #[test]
    fn test_crossover_slots_refilled_from_elite() {
        let before = population(&["ab", "ba", "cccc", "cccc"]);
        let options = GewepOptions::default()
            .with_mutation_pool_size(0.0)
            .with_crossover_pool_size(0.5);
        let mut rng = create_rng(7);
        let after = gewep(options).run_next_round(&before, &mut rng).unwrap();

        assert_eq!(after.len(), 4);
        for individual in after.individuals() {
            assert!(
                individual.chromosome.genes().iter().all(|g| g.symbol() != 'c'),
                "{} inherited from a replaced slot",
                individual.chromosome
            );
        }
    }

    #[test]
    fn test_single_elite_parent_still_fills_slots() {
        let before = population(&["ab", "abc", "abca", "abcab"]);
        let options = GewepOptions::default()
            .with_mutation_pool_size(0.5)
            .with_crossover_pool_size(0.25)
            .with_randomisation_chance(1.0)
            .with_percent_genes_to_randomise(0.0);
        let mut rng = create_rng(3);
        let after = gewep(options).run_next_round(&before, &mut rng).unwrap();

        assert_eq!(after.len(), 4);
        assert!(after.individuals().iter().any(|i| i.chromosome.to_string() == "ab"));
        // Every child is built from "ab" alone.
        for individual in after.individuals() {
            assert!(individual.chromosome.genes().iter().all(|g| g.symbol() != 'c'));
        }
    }

    #[test]
    fn test_deterministic_under_seed() {
        let before = population(&["abcab", "ab", "cabca", "bca", "ccab", "a"]);
        let algorithm = gewep(GewepOptions::default().with_percent_genes_to_randomise(0.5));
        let first = algorithm.run_next_round(&before, &mut create_rng(11)).unwrap();
        let second = algorithm.run_next_round(&before, &mut create_rng(11)).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_size_invariance(
            members in prop::collection::vec("[abc]{0,12}", 1..24),
            mutation in 0.0f64..=0.5,
            crossover in 0.0f64..=0.5,
            seed: u64,
        ) {
            let refs: Vec<&str> = members.iter().map(String::as_str).collect();
            let before = population(&refs);
            let options = GewepOptions::default()
                .with_mutation_pool_size(mutation)
                .with_crossover_pool_size(crossover);
            let after = gewep(options).run_next_round(&before, &mut create_rng(seed)).unwrap();
            prop_assert_eq!(after.len(), before.len());
            if ExclusivePools::compute(before.len(), &options).elite > 0 {
                prop_assert!(after.best().fitness <= before.best().fitness);
            }
        }
    }
}
