//! # majority-vote
//!
//! Repeated rounds of majority voting over a fixed population, with
//! cumulative scores for siding with the majority.
//!
//! ## Rules
//!
//! 1. Every player draws a vote (For : Against : Abstain = 2 : 2 : 1), then
//!    the designated player's vote is replaced by the caller's choice.
//! 2. For wins if it has at least as many votes as Against (ties go to For).
//! 3. Winning side +1, losing side -1, abstainers unchanged.
//! 4. The top players by score are reported after each round.
//!
//! ## Modules
//!
//! - `core`: Votes, players, population, RNG, configuration
//! - `round`: Tally, outcome, scoring and round reports
//! - `simulation`: Driver that owns the population and runs all rounds

pub mod core;
pub mod error;
pub mod round;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerId, Population,
    SimulationConfig,
    Vote, VoteDistribution, VoteRng, VoteWeights,
};

pub use crate::error::VotingError;

pub use crate::round::{Outcome, RoundEngine, RoundReport, Tally, TIE_BREAK};

pub use crate::simulation::Simulation;
