//! Deterministic random number generation for vote draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Forkable**: Independent streams for population draws and the designated vote
//!
//! ```
//! use majority_vote::core::{VoteDistribution, VoteRng};
//!
//! let dist = VoteDistribution::default();
//! let mut a = VoteRng::new(42);
//! let mut b = VoteRng::new(42);
//! assert_eq!(a.draw_vote(&dist), b.draw_vote(&dist));
//! ```

use rand::distributions::Distribution;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::vote::{Vote, VoteDistribution};

/// Seedable RNG used by the voting engine.
///
/// Uses ChaCha8 so a given seed reproduces the same simulation on every platform.
#[derive(Clone, Debug)]
pub struct VoteRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl VoteRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent, deterministic stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Draw one vote from the distribution.
    pub fn draw_vote(&mut self, dist: &VoteDistribution) -> Vote {
        dist.sample(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut VoteRng, n: usize) -> Vec<Vote> {
        let dist = VoteDistribution::default();
        (0..n).map(|_| rng.draw_vote(&dist)).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = VoteRng::new(42);
        let mut rng2 = VoteRng::new(42);
        assert_eq!(draws(&mut rng1, 100), draws(&mut rng2, 100));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = VoteRng::new(1);
        let mut rng2 = VoteRng::new(2);
        assert_ne!(draws(&mut rng1, 50), draws(&mut rng2, 50));
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = VoteRng::new(42);
        let mut forked = rng.fork();
        assert_ne!(draws(&mut rng, 50), draws(&mut forked, 50));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = VoteRng::new(42);
        let mut rng2 = VoteRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();
        assert_eq!(forked1.seed(), forked2.seed());

        let second = rng1.fork();
        assert_ne!(second.seed(), forked1.seed());
    }
}
