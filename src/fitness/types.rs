//! Trait definitions for the fitness oracle.
//!
//! [`FitnessMetric`] is the only seam between the search engine and the
//! compiler. [`Program`] is the contract a compiler's program handle must
//! meet for the [`super::ProgramSize`] adapter.

use crate::chromosome::{Chromosome, Gene};
use crate::error::Result;

/// Scores a chromosome. Lower is better.
///
/// Implementations must be deterministic and free of side effects for a
/// given chromosome: the population caches scores and may evaluate
/// distinct chromosomes in parallel.
///
/// # Errors
///
/// A failure means the oracle cannot handle a chromosome the alphabet can
/// produce. The search does not retry; the error aborts the run.
pub trait FitnessMetric: Send + Sync {
    fn evaluate(&self, chromosome: &Chromosome) -> Result<usize>;
}

/// A parsed input program that can be optimised and measured.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct MyProgram { ast: Block }
///
/// impl Program for MyProgram {
///     fn optimise(&mut self, steps: &[Gene]) -> Result<()> {
///         for step in steps {
///             run_step(step.symbol(), &mut self.ast)?;
///         }
///         Ok(())
///     }
///     fn code_size(&self) -> Result<usize> { Ok(self.ast.node_count()) }
/// }
/// ```
pub trait Program: Clone + Send + Sync {
    /// Applies the steps in order, in place.
    fn optimise(&mut self, steps: &[Gene]) -> Result<()>;

    /// Measures the current program.
    fn code_size(&self) -> Result<usize>;
}
