//! Simulation configuration.
//!
//! Defaults reproduce the standard run: 49 players, 14 rounds, top 3 reported,
//! votes drawn 2:2:1 for/against/abstain.

use serde::{Deserialize, Serialize};

use super::vote::VoteWeights;
use crate::error::VotingError;

/// Configuration for a `Simulation`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of players. Fixed for the life of the simulation.
    pub player_count: usize,

    /// Number of rounds the driver runs.
    pub rounds: u32,

    /// How many top-ranked players each report includes.
    pub top_n: usize,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Draw weights for random votes.
    pub weights: VoteWeights,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            player_count: 49,
            rounds: 14,
            top_n: 3,
            seed: None,
            weights: VoteWeights::default(),
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: VoteWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Check the configuration before building a simulation.
    pub fn validate(&self) -> Result<(), VotingError> {
        if self.player_count == 0 {
            return Err(VotingError::InvalidConfig("player_count must be at least 1".into()));
        }
        if self.player_count > u32::MAX as usize {
            return Err(VotingError::InvalidConfig(format!(
                "player_count {} exceeds {}",
                self.player_count,
                u32::MAX
            )));
        }
        if self.top_n == 0 {
            return Err(VotingError::InvalidConfig("top_n must be at least 1".into()));
        }
        if self.weights.total() == 0 {
            return Err(VotingError::InvalidWeights(self.weights));
        }
        Ok(())
    }
}
