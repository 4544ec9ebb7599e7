//! Seedable random source injected into the generator and the agents.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Concrete random source used throughout a run.
pub type RandomSource = StdRng;

/// Builds a random source, deterministic when a seed is supplied.
pub fn seeded(seed: Option<u64>) -> RandomSource {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
