//! Batch simulation: many strategy-driven games on one reused `Game`.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{CombatError, PlayerId, Result, RulesConfig, StrategyConfig};
use crate::policy::Strategy;
use crate::rules::{DrawReason, GameResult};

use super::game::GameBuilder;

/// Configuration for a batch of games.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play (default: 1000).
    pub games: u32,

    /// Participants per game (default: 3).
    pub player_count: usize,

    /// Strategies handed out to seats in turn
    /// (default: aggressive, defensive).
    pub strategies: Vec<Strategy>,

    /// Rules of every game.
    pub rules: RulesConfig,

    /// Strategy tuning.
    pub strategy_config: StrategyConfig,

    /// Seed of the shared game RNG.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            player_count: 3,
            strategies: vec![Strategy::Aggressive, Strategy::Defensive],
            rules: RulesConfig::default(),
            strategy_config: StrategyConfig::default(),
            seed: 42,
        }
    }
}

impl SimulationConfig {
    /// Create a new simulation config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the participant count.
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the strategy rotation.
    pub fn with_strategies(mut self, strategies: &[Strategy]) -> Self {
        self.strategies = strategies.to_vec();
        self
    }

    /// Set the rules.
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Win count of one participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTally {
    /// Participant id.
    pub player: PlayerId,
    /// Display name.
    pub name: String,
    /// Strategy played.
    pub strategy: Strategy,
    /// Games won.
    pub wins: u32,
}

/// Aggregate outcome of a batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Games played.
    pub games: u32,
    /// Wins per participant, in player order.
    pub tallies: Vec<PlayerTally>,
    /// Games where the last participants eliminated each other.
    pub no_survivor_draws: u32,
    /// Games stopped by the round cap.
    pub round_cap_draws: u32,
    /// Rounds played across all games.
    pub total_rounds: u64,
}

impl SimulationReport {
    /// Mean rounds per game.
    #[must_use]
    pub fn average_rounds(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_rounds as f64 / f64::from(self.games)
        }
    }

    /// Games without a winner.
    #[must_use]
    pub fn draws(&self) -> u32 {
        self.no_survivor_draws + self.round_cap_draws
    }

    /// Share of games won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        match self.tallies.get(player.index()) {
            Some(tally) if self.games > 0 => f64::from(tally.wins) / f64::from(self.games),
            _ => 0.0,
        }
    }
}

/// Play `config.games` games on one game instance, resetting between them.
pub fn simulate_games(config: &SimulationConfig) -> Result<SimulationReport> {
    if config.games == 0 {
        return Err(CombatError::InvalidConfig("games must be at least 1"));
    }

    let mut game = GameBuilder::new()
        .player_count(config.player_count)
        .strategies(&config.strategies)
        .rules(config.rules.clone())
        .strategy_config(config.strategy_config.clone())
        .build(config.seed)?;

    let mut report = SimulationReport {
        games: config.games,
        tallies: game
            .seats()
            .iter()
            .map(|(player, seat)| PlayerTally {
                player,
                name: seat.name.clone(),
                strategy: seat.strategy,
                wins: 0,
            })
            .collect(),
        no_survivor_draws: 0,
        round_cap_draws: 0,
        total_rounds: 0,
    };

    for _ in 0..config.games {
        match game.run()? {
            GameResult::Winner(player) => report.tallies[player.index()].wins += 1,
            GameResult::Draw(DrawReason::NoSurvivors) => report.no_survivor_draws += 1,
            GameResult::Draw(DrawReason::RoundCap) => report.round_cap_draws += 1,
        }
        report.total_rounds += u64::from(game.rounds());
        game.reset();
    }

    info!(
        games = report.games,
        draws = report.draws(),
        average_rounds = report.average_rounds(),
        "simulation finished"
    );
    for tally in &report.tallies {
        info!(name = %tally.name, strategy = %tally.strategy, wins = tally.wins, "tally");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_game_accounted_for() {
        let config = SimulationConfig::new().with_games(200).with_seed(7);
        let report = simulate_games(&config).unwrap();

        let wins: u32 = report.tallies.iter().map(|t| t.wins).sum();
        assert_eq!(wins + report.draws(), 200);
        assert_eq!(report.tallies.len(), 3);
        assert_eq!(report.tallies[1].strategy, Strategy::Defensive);
        assert!(report.average_rounds() >= 1.0);
    }

    #[test]
    fn test_passive_players_always_hit_cap() {
        let config = SimulationConfig::new()
            .with_games(3)
            .with_player_count(2)
            .with_strategies(&[Strategy::Random])
            .with_rules(RulesConfig::default().with_round_cap(10));

        let report = simulate_games(&config).unwrap();

        assert_eq!(report.round_cap_draws, 3);
        assert_eq!(report.total_rounds, 30);
        assert_eq!(report.average_rounds(), 10.0);
        assert_eq!(report.win_rate(PlayerId::new(0)), 0.0);
    }

    #[test]
    fn test_zero_games_rejected() {
        let config = SimulationConfig::new().with_games(0);
        assert!(simulate_games(&config).is_err());
    }
}
