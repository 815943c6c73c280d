//! Game driving on top of the rules engine.
//!
//! - `Game`: owns a roster, plays rounds from strategies or external
//!   records, enforces the round cap and reports the result
//! - `Duel`: a two-seat game where one seat is the Monte-Carlo bot
//! - `simulate_games`: many games on one reused instance, with win tallies
//!
//! Supports 2-255 participants.

mod duel;
mod game;
mod simulation;

pub use duel::{Duel, DuelRound, BOT, CHALLENGER};
pub use game::{Game, GameBuilder, Seat};
pub use simulation::{simulate_games, PlayerTally, SimulationConfig, SimulationReport};
