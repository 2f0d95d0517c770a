//! Votes and the weighted three-way draw.
//!
//! A player either votes `For`, votes `Against`, or abstains. Random votes
//! are not uniform over the three values: `For` and `Against` are each twice
//! as likely as `Abstain` under the default weights.
//!
//! ```
//! use majority_vote::core::{Vote, VoteDistribution, VoteRng};
//!
//! let mut rng = VoteRng::new(7);
//! let dist = VoteDistribution::default();
//! let vote = rng.draw_vote(&dist);
//! assert!(matches!(vote, Vote::For | Vote::Against | Vote::Abstain));
//! ```

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::VotingError;

/// A single player's choice in a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    For,
    Against,
    /// No vote cast. Abstainers are never scored.
    #[default]
    Abstain,
}

impl Vote {
    /// All votes, in draw-table order.
    pub const ALL: [Vote; 3] = [Vote::For, Vote::Against, Vote::Abstain];

    /// Whether the player actually took a side.
    #[must_use]
    pub const fn is_cast(self) -> bool {
        !matches!(self, Vote::Abstain)
    }
}

impl std::fmt::Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Vote::For => "for",
            Vote::Against => "against",
            Vote::Abstain => "abstain",
        };
        f.write_str(name)
    }
}

/// Relative draw weights for each vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteWeights {
    pub for_weight: u32,
    pub against_weight: u32,
    pub abstain_weight: u32,
}

impl VoteWeights {
    #[must_use]
    pub const fn new(for_weight: u32, against_weight: u32, abstain_weight: u32) -> Self {
        Self {
            for_weight,
            against_weight,
            abstain_weight,
        }
    }

    /// Weights in `Vote::ALL` order.
    #[must_use]
    pub const fn as_array(&self) -> [u32; 3] {
        [self.for_weight, self.against_weight, self.abstain_weight]
    }

    /// Weights widened so their sum cannot overflow.
    #[must_use]
    pub fn as_u64_array(&self) -> [u64; 3] {
        self.as_array().map(u64::from)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.as_u64_array().iter().sum()
    }
}

impl Default for VoteWeights {
    /// Equivalent to drawing uniformly from `[For, For, Against, Against, Abstain]`.
    fn default() -> Self {
        Self::new(2, 2, 1)
    }
}

/// Sampling distribution over `Vote`.
#[derive(Clone, Debug)]
pub struct VoteDistribution {
    weights: VoteWeights,
    index: WeightedIndex<u64>,
}

impl VoteDistribution {
    /// Build a distribution from explicit weights.
    ///
    /// Fails if every weight is zero.
    pub fn new(weights: VoteWeights) -> Result<Self, VotingError> {
        let index = WeightedIndex::new(weights.as_u64_array())
            .map_err(|_| VotingError::InvalidWeights(weights))?;
        Ok(Self { weights, index })
    }

    #[must_use]
    pub fn weights(&self) -> VoteWeights {
        self.weights
    }
}

impl Default for VoteDistribution {
    fn default() -> Self {
        let weights = VoteWeights::default();
        Self {
            weights,
            index: WeightedIndex::new(weights.as_u64_array()).expect("default weights are non-zero"),
        }
    }
}

impl Distribution<Vote> for VoteDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vote {
        Vote::ALL[self.index.sample(rng)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_is_cast() {
        assert!(Vote::For.is_cast());
        assert!(Vote::Against.is_cast());
        assert!(!Vote::Abstain.is_cast());
    }

    #[test]
    fn test_default_weights() {
        let weights = VoteWeights::default();
        assert_eq!(weights.as_array(), [2, 2, 1]);
        assert_eq!(weights.total(), 5);
    }

    #[test]
    fn test_zero_weights_rejected() {
        let result = VoteDistribution::new(VoteWeights::new(0, 0, 0));
        assert!(matches!(result, Err(VotingError::InvalidWeights(_))));
    }

    #[test]
    fn test_extreme_weights_accepted() {
        let weights = VoteWeights::new(u32::MAX, 1, 0);
        let dist = VoteDistribution::new(weights).unwrap();
        assert_eq!(dist.weights(), weights);
        assert_eq!(weights.total(), u64::from(u32::MAX) + 1);

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            assert_ne!(dist.sample(&mut rng), Vote::Abstain);
        }
    }

    #[test]
    fn test_single_weight_always_drawn() {
        let dist = VoteDistribution::new(VoteWeights::new(0, 3, 0)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..50 {
            assert_eq!(dist.sample(&mut rng), Vote::Against);
        }
    }

    #[test]
    fn test_default_frequencies() {
        let dist = VoteDistribution::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let draws = 50_000;
        let mut counts = [0usize; 3];
        for _ in 0..draws {
            let vote = dist.sample(&mut rng);
            counts[Vote::ALL.iter().position(|&v| v == vote).unwrap()] += 1;
        }

        // Expected 0.4 / 0.4 / 0.2
        let share = |c: usize| c as f64 / draws as f64;
        assert!((share(counts[0]) - 0.4).abs() < 0.02);
        assert!((share(counts[1]) - 0.4).abs() < 0.02);
        assert!((share(counts[2]) - 0.2).abs() < 0.02);
    }

    #[test]
    fn test_vote_serde() {
        let json = serde_json::to_string(&Vote::Against).unwrap();
        assert_eq!(json, "\"against\"");
        let back: Vote = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Vote::Against);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Vote::For), "for");
        assert_eq!(format!("{}", Vote::Abstain), "abstain");
    }
}
