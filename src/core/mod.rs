//! Core types: players, actions, RNG, configuration and errors.
//!
//! Everything here is game-state plumbing with no rules attached; the
//! `rules` module gives these types their meaning.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionSet, Move, RoundRecord};
pub use config::{RulesConfig, StrategyConfig};
pub use error::{CombatError, Result};
pub use player::{PlayerId, PlayerMap, PlayerState};
pub use rng::GameRng;
