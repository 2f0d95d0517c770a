//! Player records and the fixed-size population.
//!
//! ## PlayerId
//!
//! Stable 1-based identifier, assigned in creation order.
//!
//! ## Population
//!
//! Ordered, fixed-size sequence of `Player` records backed by a `Vec`.
//! Created once, never resized; scores accumulate across rounds.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::vote::Vote;

/// Player identifier. The first player is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position of this player in the population (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize).wrapping_sub(1)
    }

    /// Iterate over the ids of a population of `player_count` players.
    ///
    /// ```
    /// use majority_vote::core::PlayerId;
    ///
    /// let ids: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(ids, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u32).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Cumulative score. May go negative.
    pub score: i64,
    /// Vote for the current round only.
    pub vote: Vote,
    /// Veto flag from the player record. Rounds never set it.
    pub veto: bool,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            score: 0,
            vote: Vote::Abstain,
            veto: false,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{id: {}, score: {}, vote: {}, veto: {}}}",
            self.id.0, self.score, self.vote, self.veto
        )
    }
}

/// Fixed-size ordered population of players.
///
/// ```
/// use majority_vote::core::{PlayerId, Population};
///
/// let mut population = Population::new(4);
/// population[PlayerId::new(2)].score = 3;
///
/// let top = population.top(1);
/// assert_eq!(top[0].id, PlayerId::new(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Population {
    players: Vec<Player>,
}

impl Population {
    /// Create `size` players with ids `1..=size`, all scores zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Must have at least 1 player");
        assert!(size <= u32::MAX as usize, "Population too large");

        let players = PlayerId::all(size).map(Player::new).collect();
        Self { players }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false; a population has at least one player.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// The player whose vote is supplied by the caller each round.
    #[must_use]
    pub fn designated(&self) -> &Player {
        &self.players[0]
    }

    pub fn designated_mut(&mut self) -> &mut Player {
        &mut self.players[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Snapshot of all players by score, highest first.
    ///
    /// Stable: equal scores keep population order.
    #[must_use]
    pub fn ranked(&self) -> Vec<Player> {
        let mut snapshot = self.players.clone();
        snapshot.sort_by(|a, b| b.score.cmp(&a.score));
        snapshot
    }

    /// The `n` highest-scoring players (fewer if the population is smaller).
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<Player> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

impl Index<PlayerId> for Population {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        &self.players[id.index()]
    }
}

impl IndexMut<PlayerId> for Population {
    fn index_mut(&mut self, id: PlayerId) -> &mut Self::Output {
        &mut self.players[id.index()]
    }
}
