//! Injectable simulation RNG.
//!
//! A mission draws every random choice (the final pick among tied move
//! candidates) from one `SimRng`.  Robots are updated sequentially, so a
//! single generator consumed in robot order is enough for exact
//! reproducibility: the same seed, fleet, and policy always produce the same
//! trajectories.
//!
//! Without a seed the generator is seeded from OS entropy and runs are not
//! reproducible.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Simulation-level RNG shared by the active move policy.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Used when no seed is configured.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// `new(seed)` when a seed is given, otherwise `from_entropy()`.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// Choose an element uniformly at random.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
