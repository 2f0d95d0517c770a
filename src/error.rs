//! Error type for configuring and running a simulation.

use crate::core::VoteWeights;

#[derive(Debug, thiserror::Error)]
pub enum VotingError {
    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),

    #[error("vote weights {0:?} must not all be zero")]
    InvalidWeights(VoteWeights),

    #[error("failed to write round report")]
    Output(#[from] std::io::Error),
}
