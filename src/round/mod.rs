//! Voting rounds.
//!
//! A round draws a vote for every player, overrides the designated player's
//! vote, tallies, picks the majority outcome and scores everyone:
//! - winning side: +1
//! - losing side: -1
//! - abstained: unchanged

pub mod engine;
pub mod report;
pub mod tally;

pub use engine::{apply_scores, assign_votes, score_delta, RoundEngine};
pub use report::RoundReport;
pub use tally::{Outcome, Tally, TIE_BREAK};
