//! Rule-based strategies.
//!
//! A [`Strategy`] maps a participant's current state to a [`Move`]. The set
//! is closed and dispatched with a `match`; every strategy only ever issues
//! moves that are legal for the actor.

use serde::{Deserialize, Serialize};

use crate::core::{Action, GameRng, Move, PlayerId, PlayerMap, PlayerState, StrategyConfig};
use crate::rules::ResolutionEngine;

/// The closed set of rule-based strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Always charges.
    #[default]
    Random,
    /// Rocket when affordable, then Shoot, otherwise Charge.
    Aggressive,
    /// Mostly protects, charges while already shielded.
    Defensive,
    /// Uniform over the currently legal actions.
    RandomLegal,
}

impl Strategy {
    /// Every strategy.
    pub const ALL: [Strategy; 4] = [
        Strategy::Random,
        Strategy::Aggressive,
        Strategy::Defensive,
        Strategy::RandomLegal,
    ];

    /// Lowercase tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Aggressive => "aggressive",
            Strategy::Defensive => "defensive",
            Strategy::RandomLegal => "random-legal",
        }
    }

    /// Decide `player`'s move for the coming round.
    ///
    /// Returns `None` for a dead or unknown participant; such a participant
    /// has no entry in the round record.
    pub fn decide(
        self,
        player: PlayerId,
        players: &PlayerMap<PlayerState>,
        engine: &ResolutionEngine,
        config: &StrategyConfig,
        rng: &mut GameRng,
    ) -> Option<Move> {
        let state = players.get(player)?;
        if !state.is_alive {
            return None;
        }

        let action = self.choose_action(state, engine, config, rng);
        if !action.is_attack() {
            return Some(Move { action, target: None });
        }

        // Nobody left to attack: charging is always legal.
        Some(match pick_target(player, players, rng) {
            Some(target) => Move::aimed(action, target),
            None => Move::charge(),
        })
    }

    /// The action this strategy picks for `state`, ignoring targets.
    pub fn choose_action(
        self,
        state: &PlayerState,
        engine: &ResolutionEngine,
        config: &StrategyConfig,
        rng: &mut GameRng,
    ) -> Action {
        let rules = engine.rules();
        match self {
            Strategy::Random => Action::Charge,
            Strategy::Aggressive => {
                if state.can_afford(rules.rocket_cost) {
                    Action::Rocket
                } else if state.can_afford(config.aggressive_shoot_threshold.max(rules.shoot_cost)) {
                    Action::Shoot
                } else {
                    Action::Charge
                }
            }
            Strategy::Defensive => {
                if state.is_protected {
                    Action::Charge
                } else if rng.gen_bool(protect_probability(config)) {
                    Action::Protect
                } else {
                    Action::Charge
                }
            }
            Strategy::RandomLegal => random_legal_action(engine, state, rng).unwrap_or(Action::Charge),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Protect probability clamped to [0, 1]; NaN counts as 0.
fn protect_probability(config: &StrategyConfig) -> f64 {
    let probability = config.defensive_protect_probability;
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}

/// Uniform choice among the actions legal for `state`.
///
/// `None` only for a dead participant.
pub fn random_legal_action(engine: &ResolutionEngine, state: &PlayerState, rng: &mut GameRng) -> Option<Action> {
    let legal = engine.legal_actions(state);
    rng.choose(&legal).copied()
}

/// Uniform choice among the live participants other than `player`.
pub fn pick_target(player: PlayerId, players: &PlayerMap<PlayerState>, rng: &mut GameRng) -> Option<PlayerId> {
    let opponents = players.opponents_of(player);
    rng.choose(&opponents).copied()
}
