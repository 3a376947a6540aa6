//! Presentation order for a quiz run.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Produces the index sequence in which questions are presented.
///
/// The random source is seeded once, when the generator is built.
pub struct OrderGenerator {
    rng: StdRng,
}

impl OrderGenerator {
    /// Seed from the wall clock's nanosecond reading.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(nanos)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Return a permutation of `0..count`.
    ///
    /// Without `shuffle` this is the identity order.
    pub fn indices(&mut self, count: usize, shuffle: bool) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..count).collect();
        if shuffle {
            indices.shuffle(&mut self.rng);
        }
        indices
    }
}
