//! The voting round: assign votes, tally, decide, score, report.

use log::{debug, trace};

use super::report::RoundReport;
use super::tally::{Outcome, Tally};
use crate::core::{Population, Vote, VoteDistribution, VoteRng};

/// Score change for a single vote under an outcome.
///
/// Winning side gains one, losing side loses one, abstainers are untouched.
#[must_use]
pub fn score_delta(vote: Vote, outcome: Outcome) -> i64 {
    if !vote.is_cast() {
        0
    } else if vote == outcome.winning_vote() {
        1
    } else {
        -1
    }
}

/// Draw a fresh vote for every player, then set the designated player's vote.
///
/// The override must come after the bulk draw or it would be overwritten.
pub fn assign_votes(
    population: &mut Population,
    designated_vote: Vote,
    rng: &mut VoteRng,
    distribution: &VoteDistribution,
) {
    for player in population.iter_mut() {
        player.vote = rng.draw_vote(distribution);
    }

    let designated = population.designated_mut();
    trace!("{} drew {}, overridden with {}", designated.id, designated.vote, designated_vote);
    designated.vote = designated_vote;
}

/// Tally the current votes, decide the outcome and apply it to every score.
pub fn apply_scores(population: &mut Population) -> (Tally, Outcome) {
    let tally = Tally::count(population.iter());
    let outcome = Outcome::decide(&tally);

    for player in population.iter_mut() {
        player.score += score_delta(player.vote, outcome);
    }

    (tally, outcome)
}

/// Runs voting rounds against a caller-owned population.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    distribution: VoteDistribution,
    top_n: usize,
    rounds_played: u32,
}

impl RoundEngine {
    pub fn new(distribution: VoteDistribution, top_n: usize) -> Self {
        Self {
            distribution,
            top_n,
            rounds_played: 0,
        }
    }

    #[must_use]
    pub fn distribution(&self) -> &VoteDistribution {
        &self.distribution
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Run one round with random votes for everyone except the designated player.
    pub fn run_round(
        &mut self,
        population: &mut Population,
        designated_vote: Vote,
        rng: &mut VoteRng,
    ) -> RoundReport {
        assign_votes(population, designated_vote, rng, &self.distribution);
        self.score_round(population)
    }

    /// Score the votes already present on `population` and build the report.
    pub fn score_round(&mut self, population: &mut Population) -> RoundReport {
        let (tally, outcome) = apply_scores(population);
        self.rounds_played += 1;

        debug!(
            "round {}: for={} against={} abstain={} -> {}",
            self.rounds_played, tally.for_count, tally.against_count, tally.abstain_count, outcome
        );

        RoundReport {
            round: self.rounds_played,
            tally,
            outcome,
            top: population.top(self.top_n),
        }
    }
}
