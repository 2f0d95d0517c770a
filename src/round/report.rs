//! What a round emits: the tally, the outcome and the top-ranked players.

use serde::Serialize;

use super::tally::{Outcome, Tally};
use crate::core::Player;

/// Result of one voting round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u32,
    pub tally: Tally,
    pub outcome: Outcome,
    /// Snapshot of the highest-scoring players after scoring, best first.
    pub top: Vec<Player>,
}

impl std::fmt::Display for RoundReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "for: {}", self.tally.for_count)?;
        writeln!(f, "against: {}", self.tally.against_count)?;
        for player in &self.top {
            writeln!(f, "  {}", player)?;
        }
        Ok(())
    }
}
