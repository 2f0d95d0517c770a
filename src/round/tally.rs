//! Vote counting and majority outcome.

use serde::{Deserialize, Serialize};

use crate::core::{Player, Vote};

/// Which side won a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    ForWins,
    AgainstWins,
}

/// Winner when for and against counts are equal (including 0-0).
pub const TIE_BREAK: Outcome = Outcome::ForWins;

impl Outcome {
    /// Majority outcome for a tally. Ties resolve to `TIE_BREAK`.
    #[must_use]
    pub fn decide(tally: &Tally) -> Self {
        use std::cmp::Ordering;

        match tally.for_count.cmp(&tally.against_count) {
            Ordering::Greater => Outcome::ForWins,
            Ordering::Less => Outcome::AgainstWins,
            Ordering::Equal => TIE_BREAK,
        }
    }

    /// The vote that sits on the winning side.
    #[must_use]
    pub const fn winning_vote(self) -> Vote {
        match self {
            Outcome::ForWins => Vote::For,
            Outcome::AgainstWins => Vote::Against,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::ForWins => f.write_str("for wins"),
            Outcome::AgainstWins => f.write_str("against wins"),
        }
    }
}

/// Counts of each vote in a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub for_count: usize,
    pub against_count: usize,
    pub abstain_count: usize,
}

impl Tally {
    /// Count the current votes of `players`.
    pub fn count<'a>(players: impl IntoIterator<Item = &'a Player>) -> Self {
        let mut tally = Self::default();
        for player in players {
            match player.vote {
                Vote::For => tally.for_count += 1,
                Vote::Against => tally.against_count += 1,
                Vote::Abstain => tally.abstain_count += 1,
            }
        }
        tally
    }

    /// Number of players counted, abstainers included.
    #[must_use]
    pub fn total(&self) -> usize {
        self.for_count + self.against_count + self.abstain_count
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.for_count == self.against_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn players(votes: &[Vote]) -> Vec<Player> {
        votes
            .iter()
            .enumerate()
            .map(|(i, &vote)| {
                let mut p = Player::new(PlayerId::new(i as u32 + 1));
                p.vote = vote;
                p
            })
            .collect()
    }

    #[test]
    fn test_count() {
        let ps = players(&[Vote::For, Vote::Against, Vote::Against, Vote::Abstain]);
        let tally = Tally::count(&ps);

        assert_eq!(tally.for_count, 1);
        assert_eq!(tally.against_count, 2);
        assert_eq!(tally.abstain_count, 1);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_decide() {
        let tally = Tally { for_count: 3, against_count: 2, abstain_count: 0 };
        assert_eq!(Outcome::decide(&tally), Outcome::ForWins);

        let tally = Tally { for_count: 1, against_count: 2, abstain_count: 5 };
        assert_eq!(Outcome::decide(&tally), Outcome::AgainstWins);
    }

    #[test]
    fn test_tie_resolves_to_for() {
        let tally = Tally { for_count: 4, against_count: 4, abstain_count: 1 };
        assert!(tally.is_tie());
        assert_eq!(Outcome::decide(&tally), Outcome::ForWins);

        let empty = Tally { for_count: 0, against_count: 0, abstain_count: 3 };
        assert_eq!(Outcome::decide(&empty), TIE_BREAK);
    }

    #[test]
    fn test_winning_vote() {
        assert_eq!(Outcome::ForWins.winning_vote(), Vote::For);
        assert_eq!(Outcome::AgainstWins.winning_vote(), Vote::Against);
    }
}
