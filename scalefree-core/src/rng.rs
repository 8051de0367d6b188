//! RNG construction shared by the simulation engines.

use rand::{SeedableRng, rngs::SmallRng};

/// Builds the RNG a simulation draws from.
///
/// Seeded runs are reproducible; unseeded runs pull a fresh seed from the
/// operating system.
pub(crate) fn simulation_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(value) => SmallRng::seed_from_u64(value),
        None => SmallRng::from_entropy(),
    }
}
