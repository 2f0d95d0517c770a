//! Core types: votes, players, the population, RNG, configuration.

pub mod vote;
pub mod player;
pub mod rng;
pub mod config;

pub use vote::{Vote, VoteWeights, VoteDistribution};
pub use player::{PlayerId, Player, Population};
pub use rng::VoteRng;
pub use config::SimulationConfig;
