//! Random source handle.
//!
//! Every operator takes `&mut R where R: Rng` explicitly; nothing in the
//! crate reads a global generator. A run seeded through [`create_rng`] is
//! fully reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// The generator type used by [`crate::Phaser`] and the tests.
pub type PhaserRng = StdRng;

/// Creates a seeded generator.
pub fn create_rng(seed: u64) -> PhaserRng {
    StdRng::seed_from_u64(seed)
}
