//! Round loop execution.
//!
//! [`AlgorithmRunner`] feeds the population through a strategy one round
//! at a time and writes each round's result to an output sink.
//!
//! The runner is a two-state machine: it is [`RunnerState::Running`]
//! until `max_rounds` rounds have completed, then [`RunnerState::Stopped`].
//! Without `max_rounds` it never stops on its own.

use crate::algorithm::GeneticAlgorithm;
use crate::error::Result;
use crate::population::Population;
use log::info;
use rand::Rng;
use std::io::Write;

/// Options for [`AlgorithmRunner`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunnerOptions {
    /// Rounds to run before stopping. `None` runs until the process is
    /// terminated from outside.
    pub max_rounds: Option<usize>,
}

impl RunnerOptions {
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    Running,
    Stopped,
}

/// Drives successive rounds of a [`GeneticAlgorithm`].
///
/// # Usage
///
/// ```ignore
/// let mut runner = AlgorithmRunner::new(population, RunnerOptions::default().with_max_rounds(10), std::io::stdout());
/// runner.run(&algorithm, &mut rng)?;
/// println!("best: {}", runner.population().best());
/// ```
pub struct AlgorithmRunner<W: Write> {
    population: Population,
    options: RunnerOptions,
    output: W,
    round: usize,
}

impl<W: Write> AlgorithmRunner<W> {
    pub fn new(population: Population, options: RunnerOptions, output: W) -> Self {
        Self {
            population,
            options,
            output,
            round: 0,
        }
    }

    pub fn state(&self) -> RunnerState {
        match self.options.max_rounds {
            Some(max_rounds) if self.round >= max_rounds => RunnerState::Stopped,
            _ => RunnerState::Running,
        }
    }

    /// Runs rounds until [`RunnerState::Stopped`].
    ///
    /// # Errors
    /// A metric or output failure aborts the run; the population is left
    /// at the last completed round.
    pub fn run<R: Rng>(&mut self, algorithm: &GeneticAlgorithm, rng: &mut R) -> Result<()> {
        while self.step(algorithm, rng)? == RunnerState::Running {}
        Ok(())
    }

    /// Runs a single round and reports it. Does nothing once stopped.
    ///
    /// The round only counts as completed once its report is written.
    pub fn step<R: Rng>(&mut self, algorithm: &GeneticAlgorithm, rng: &mut R) -> Result<RunnerState> {
        if self.state() == RunnerState::Stopped {
            return Ok(RunnerState::Stopped);
        }

        let next = algorithm.run_next_round(&self.population, rng)?;
        let round = self.round + 1;

        writeln!(self.output, "---------- ROUND {round} ----------")?;
        write!(self.output, "{next}")?;
        self.output.flush()?;

        self.population = next;
        self.round = round;

        info!(
            "round {} done: best fitness {} ({})",
            self.round,
            self.population.best().fitness,
            algorithm.algorithm()
        );

        Ok(self.state())
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Number of completed rounds.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (Population, W) {
        (self.population, self.output)
    }
}

// ============================================================================
// Tests
// ============================================================================
