//! Opponent modelling for rollouts.
//!
//! The selector does not know what the opponent will do, so every rollout
//! samples an opponent action from an `OpponentPolicy`. The default models
//! the opponent as uniform over its legal actions.

use crate::core::{Action, GameRng, PlayerState};
use crate::policy::random_legal_action;
use crate::rules::ResolutionEngine;

/// Policy for sampling the opponent's action in a rollout.
pub trait OpponentPolicy: Send + Sync {
    /// Choose an action for the opponent.
    ///
    /// Returns `None` if the opponent cannot act.
    fn choose_action(&self, engine: &ResolutionEngine, opponent: &PlayerState, rng: &mut GameRng) -> Option<Action>;
}

/// Uniform random opponent policy.
///
/// Selects uniformly from legal actions.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose_action(&self, engine: &ResolutionEngine, opponent: &PlayerState, rng: &mut GameRng) -> Option<Action> {
        random_legal_action(engine, opponent, rng)
    }
}
