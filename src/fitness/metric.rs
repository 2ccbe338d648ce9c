//! Program-size fitness metric.

use super::types::{FitnessMetric, Program};
use crate::chromosome::Chromosome;
use crate::error::{PhaserError, Result};

/// Number of times the step sequence is applied before measuring.
///
/// Steps interact across passes; repeating the sequence approximates its
/// fixed point instead of a single-pass result.
pub const DEFAULT_REPETITION_COUNT: usize = 5;

/// Fitness is the code size of the program after applying the
/// chromosome's steps `repetition_count` times.
///
/// The wrapped program is never modified; each evaluation works on a
/// fresh copy.
#[derive(Debug, Clone)]
pub struct ProgramSize<P: Program> {
    program: P,
    repetition_count: usize,
}

impl<P: Program> ProgramSize<P> {
    pub fn new(program: P, repetition_count: usize) -> Self {
        Self {
            program,
            repetition_count,
        }
    }

    pub fn program(&self) -> &P {
        &self.program
    }

    pub fn repetition_count(&self) -> usize {
        self.repetition_count
    }
}

impl<P: Program> FitnessMetric for ProgramSize<P> {
    fn evaluate(&self, chromosome: &Chromosome) -> Result<usize> {
        let failed = |e: PhaserError| PhaserError::Metric {
            chromosome: chromosome.to_string(),
            reason: e.to_string(),
        };

        let mut program = self.program.clone();
        for _ in 0..self.repetition_count {
            program.optimise(chromosome.genes()).map_err(failed)?;
        }
        program.code_size().map_err(failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::Gene;

    /// `h` halves the size, `g` grows it by one, anything else is unknown.
    #[derive(Debug, Clone)]
    struct Counter {
        size: usize,
    }

    impl Program for Counter {
        fn optimise(&mut self, steps: &[Gene]) -> Result<()> {
            for step in steps {
                match step.symbol() {
                    'h' => self.size /= 2,
                    'g' => self.size += 1,
                    other => return Err(PhaserError::UnknownGene(other)),
                }
            }
            Ok(())
        }

        fn code_size(&self) -> Result<usize> {
            Ok(self.size)
        }
    }

    #[test]
    fn test_repetition_is_applied() {
        let metric = ProgramSize::new(Counter { size: 1000 }, DEFAULT_REPETITION_COUNT);
        // 1000 -> 500 -> 250 -> 125 -> 62 -> 31
        assert_eq!(metric.evaluate(&Chromosome::from("h")).unwrap(), 31);
        assert_eq!(metric.evaluate(&Chromosome::from("gg")).unwrap(), 1010);
    }

    #[test]
    fn test_single_repetition() {
        let metric = ProgramSize::new(Counter { size: 10 }, 1);
        assert_eq!(metric.evaluate(&Chromosome::from("hg")).unwrap(), 6);
        assert_eq!(metric.evaluate(&Chromosome::from("gh")).unwrap(), 5);
    }

    #[test]
    fn test_empty_chromosome_measures_unmodified_program() {
        let metric = ProgramSize::new(Counter { size: 42 }, DEFAULT_REPETITION_COUNT);
        assert_eq!(metric.evaluate(&Chromosome::default()).unwrap(), 42);
    }

    #[test]
    fn test_original_program_untouched() {
        let metric = ProgramSize::new(Counter { size: 64 }, 3);
        metric.evaluate(&Chromosome::from("hh")).unwrap();
        assert_eq!(metric.program().size, 64);
    }

    #[test]
    fn test_oracle_failure_propagates() {
        let metric = ProgramSize::new(Counter { size: 8 }, 2);
        match metric.evaluate(&Chromosome::from("hx")) {
            Err(PhaserError::Metric { chromosome, .. }) => assert_eq!(chromosome, "hx"),
            other => panic!("expected metric error, got {other:?}"),
        }
    }
}
