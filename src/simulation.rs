//! Simulation driver.
//!
//! Owns the population, the round engine and the RNG streams, and runs the
//! configured number of rounds in sequence. Scores carry over between rounds;
//! nothing else does.
//!
//! ```
//! use majority_vote::{Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::new().with_player_count(5).with_rounds(2).with_seed(1);
//! let mut sim = Simulation::new(config).unwrap();
//!
//! let mut out = Vec::new();
//! let reports = sim.run(&mut out).unwrap();
//! assert_eq!(reports.len(), 2);
//! assert!(String::from_utf8(out).unwrap().starts_with("for: "));
//! ```

use std::io::Write;

use log::info;

use crate::core::{Population, SimulationConfig, Vote, VoteDistribution, VoteRng};
use crate::error::VotingError;
use crate::round::{RoundEngine, RoundReport};

/// A population plus everything needed to run rounds against it.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    population: Population,
    engine: RoundEngine,
    /// Stream for the population's votes.
    rng: VoteRng,
    /// Stream for the designated player's vote.
    designated_rng: VoteRng,
}

impl Simulation {
    /// Validate `config` and create the population.
    pub fn new(config: SimulationConfig) -> Result<Self, VotingError> {
        config.validate()?;

        let distribution = VoteDistribution::new(config.weights)?;
        let mut rng = match config.seed {
            Some(seed) => VoteRng::new(seed),
            None => VoteRng::from_entropy(),
        };
        let designated_rng = rng.fork();

        Ok(Self {
            population: Population::new(config.player_count),
            engine: RoundEngine::new(distribution, config.top_n),
            rng,
            designated_rng,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[must_use]
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Mutable access for setting up scenarios between rounds.
    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.engine.rounds_played()
    }

    /// Draw a designated vote from the same weighted distribution as everyone else.
    pub fn draw_designated_vote(&mut self) -> Vote {
        self.designated_rng.draw_vote(self.engine.distribution())
    }

    /// Run a single round with an explicit vote for the designated player.
    pub fn play_round(&mut self, designated_vote: Vote) -> RoundReport {
        self.engine.run_round(&mut self.population, designated_vote, &mut self.rng)
    }

    /// Run every configured round, writing each report to `out`.
    pub fn run(&mut self, out: &mut impl Write) -> Result<Vec<RoundReport>, VotingError> {
        info!(
            "starting {} rounds with {} players (seed {})",
            self.config.rounds,
            self.population.len(),
            self.rng.seed()
        );

        let mut reports = Vec::with_capacity(self.config.rounds as usize);
        for _ in 0..self.config.rounds {
            let designated_vote = self.draw_designated_vote();
            let report = self.play_round(designated_vote);
            write!(out, "{}", report)?;
            reports.push(report);
        }
        out.flush()?;

        if let Some(leader) = self.population.top(1).first() {
            info!("finished; leader {} with score {}", leader.id, leader.score);
        }
        Ok(reports)
    }
}
