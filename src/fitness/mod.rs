//! Fitness oracle interface.
//!
//! # Core Traits
//!
//! - [`FitnessMetric`]: scores a chromosome (lower is better)
//! - [`Program`]: a compiler program handle that can be optimised and measured
//!
//! # Key Types
//!
//! - [`ProgramSize`]: code size after applying the steps repeatedly

mod metric;
mod types;

pub use metric::{ProgramSize, DEFAULT_REPETITION_COUNT};
pub use types::{FitnessMetric, Program};
