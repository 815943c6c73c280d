//! Game driver: participants, rounds, round cap and result.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    CombatError, GameRng, PlayerId, PlayerMap, PlayerState, Result, RoundRecord, RulesConfig,
    StrategyConfig,
};
use crate::policy::Strategy;
use crate::rules::{survivor_result, DrawReason, GameResult, ResolutionEngine, RoundSummary};

/// Identity of one participant: display name and strategy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Display name.
    pub name: String,
    /// Strategy used by [`Game::auto_round`].
    pub strategy: Strategy,
}

impl Seat {
    /// Create a seat.
    pub fn new(name: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }
}

/// A bounded sequence of rounds over a fixed roster.
///
/// The game owns its participants and is the unit of reuse: [`Game::reset`]
/// puts everyone back to the starting state for another trial.
#[derive(Clone, Debug)]
pub struct Game {
    engine: ResolutionEngine,
    strategy_config: StrategyConfig,
    seats: PlayerMap<Seat>,
    players: PlayerMap<PlayerState>,
    rng: GameRng,
    rounds: u32,
    result: Option<GameResult>,
}

/// Builder for creating a Game.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    player_count: usize,
    strategies: Vec<Strategy>,
    seats: Vec<Seat>,
    rules: RulesConfig,
    strategy_config: StrategyConfig,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            player_count: 3,
            strategies: vec![Strategy::Random],
            seats: Vec::new(),
            rules: RulesConfig::default(),
            strategy_config: StrategyConfig::default(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of generated seats. Ignored once explicit seats are added.
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Strategies handed out to generated seats in turn.
    pub fn strategies(mut self, strategies: &[Strategy]) -> Self {
        self.strategies = strategies.to_vec();
        self
    }

    /// Add an explicit seat.
    pub fn seat(mut self, seat: Seat) -> Self {
        self.seats.push(seat);
        self
    }

    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    pub fn strategy_config(mut self, config: StrategyConfig) -> Self {
        self.strategy_config = config;
        self
    }

    /// Build the game.
    ///
    /// Without explicit seats, `player_count` seats named "Player 1",
    /// "Player 2", ... are generated, cycling through the strategies.
    pub fn build(self, seed: u64) -> Result<Game> {
        let seats = if self.seats.is_empty() {
            if self.strategies.is_empty() {
                return Err(CombatError::InvalidConfig("at least one strategy is required"));
            }
            let strategies = &self.strategies;
            (0..self.player_count)
                .map(|i| Seat::new(format!("Player {}", i + 1), strategies[i % strategies.len()]))
                .collect()
        } else {
            self.seats
        };

        if seats.len() < 2 {
            return Err(CombatError::NotEnoughPlayers(seats.len()));
        }
        if seats.len() > 255 {
            return Err(CombatError::InvalidConfig("at most 255 participants are supported"));
        }

        self.strategy_config.validate(&self.rules)?;
        let engine = ResolutionEngine::new(self.rules)?;

        let count = seats.len();
        let seats = PlayerMap::new(count, |p| seats[p.index()].clone());

        Ok(Game {
            engine,
            strategy_config: self.strategy_config,
            seats,
            players: PlayerMap::with_default(count),
            rng: GameRng::new(seed),
            rounds: 0,
            result: None,
        })
    }
}

impl Game {
    /// Current combat state of every participant.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<PlayerState> {
        &self.players
    }

    /// Combat state of one participant.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerState> {
        self.players.get(player)
    }

    /// Names and strategies of every participant.
    #[must_use]
    pub fn seats(&self) -> &PlayerMap<Seat> {
        &self.seats
    }

    /// Number of participants.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The rules engine.
    #[must_use]
    pub fn engine(&self) -> &ResolutionEngine {
        &self.engine
    }

    /// Rounds played since the last reset.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// The result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Whether no further round may be played.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Ask every living participant's strategy for its move.
    pub fn collect_moves(&mut self) -> Result<RoundRecord> {
        let mut record = RoundRecord::new();
        for (player, seat) in self.seats.iter() {
            let decision = seat.strategy.decide(
                player,
                &self.players,
                &self.engine,
                &self.strategy_config,
                &mut self.rng,
            );
            if let Some(mv) = decision {
                record.submit(player, mv)?;
            }
        }
        Ok(record)
    }

    /// Resolve one round from externally supplied moves.
    pub fn play_round(&mut self, record: &RoundRecord) -> Result<RoundSummary> {
        if self.is_over() {
            return Err(CombatError::GameOver);
        }

        let summary = self.engine.resolve(&mut self.players, record)?;
        self.rounds += 1;

        for &player in &summary.eliminated {
            debug!(round = self.rounds, name = %self.seats[player].name, "eliminated");
        }

        self.result = survivor_result(&self.players);
        if self.result.is_none() && self.rounds >= self.engine.rules().round_cap {
            warn!(
                rounds = self.rounds,
                alive = self.players.alive_count(),
                "round cap reached without a winner"
            );
            self.result = Some(GameResult::Draw(DrawReason::RoundCap));
        }

        Ok(summary)
    }

    /// Resolve one round with moves chosen by each seat's strategy.
    pub fn auto_round(&mut self) -> Result<RoundSummary> {
        let record = self.collect_moves()?;
        self.play_round(&record)
    }

    /// Play strategy-driven rounds until the game ends.
    pub fn run(&mut self) -> Result<GameResult> {
        loop {
            if let Some(result) = self.result {
                return Ok(result);
            }
            self.auto_round()?;
        }
    }

    /// Restore every participant to its starting state.
    ///
    /// The RNG keeps going, so successive trials differ.
    pub fn reset(&mut self) {
        for (_, state) in self.players.iter_mut() {
            state.reset();
        }
        self.rounds = 0;
        self.result = None;
    }
}
