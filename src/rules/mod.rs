//! Round-resolution rules.
//!
//! `ResolutionEngine` turns a round of simultaneous moves into eliminations,
//! charge changes and shields. It is the only code that mutates combat
//! state; policies and the selector only propose moves.

pub mod engine;

pub use engine::{is_game_over, survivor_result, DrawReason, GameResult, ResolutionEngine, RoundSummary};
