//! # charge-combat
//!
//! Rules engine and action selection for "Charge Combat", a simultaneous-move
//! elimination game.
//!
//! Every round each living participant picks one action:
//!
//! - **Charge**: gain one charge
//! - **Protect**: block shots for this round
//! - **Shoot**: spend charge, kill an unprotected target
//! - **Rocket**: spend more charge, kill a target regardless of protection
//!
//! The last participant standing wins.
//!
//! ## Design Principles
//!
//! 1. **Fixed resolution order**: shields go up, then rockets, shots and
//!    charges resolve, whatever order moves were submitted in.
//!
//! 2. **Validate, then mutate**: an illegal round record is rejected as a
//!    whole with a `CombatError` and leaves the game untouched.
//!
//! 3. **Explicit randomness**: every random choice draws from a seedable
//!    `GameRng`; a fixed seed reproduces games and searches.
//!
//! ## Modules
//!
//! - `core`: Player ids and state, actions, RNG, configuration, errors
//! - `rules`: Round resolution engine and game-over checks
//! - `policy`: Rule-based strategies
//! - `search`: Monte-Carlo action selection for two-participant fights
//! - `game`: Game driver, bot duel, batch simulation

pub mod core;
pub mod game;
pub mod policy;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionSet, CombatError, GameRng, Move, PlayerId, PlayerMap, PlayerState, Result,
    RoundRecord, RulesConfig, StrategyConfig,
};

pub use crate::rules::{is_game_over, DrawReason, GameResult, ResolutionEngine, RoundSummary};

pub use crate::policy::Strategy;

pub use crate::search::{
    ActionScores, MonteCarloSelector, OpponentPolicy, SearchStats, SelectorConfig, UniformOpponent,
};

pub use crate::game::{
    simulate_games, Duel, DuelRound, Game, GameBuilder, Seat, SimulationConfig, SimulationReport,
};
