//! Monte-Carlo action selection.
//!
//! ## Overview
//!
//! For a two-participant confrontation, `MonteCarloSelector` scores each
//! legal action of one side by brute-force one-round rollouts:
//!
//! - **Snapshots**: rollouts copy `PlayerState` values, never the live game
//! - **Opponent Modeling**: the opponent's reply is sampled from an
//!   `OpponentPolicy` (uniform over legal actions by default)
//! - **Reproducible**: a fixed seed gives the same scores and picks
//! - **No pruning**: every candidate gets the full number of rollouts
//!
//! ## Usage
//!
//! ```rust
//! use charge_combat::core::{PlayerState, RulesConfig};
//! use charge_combat::rules::ResolutionEngine;
//! use charge_combat::search::{MonteCarloSelector, SelectorConfig};
//!
//! let engine = ResolutionEngine::new(RulesConfig::default()).unwrap();
//! let mut search = MonteCarloSelector::new(engine, SelectorConfig::default().with_simulations(200));
//!
//! let bot = PlayerState::with_charge(3);
//! let human = PlayerState::with_charge(0);
//! let action = search.choose(&bot, &human).unwrap();
//! println!("Bot plays {action}");
//! ```

pub mod config;
pub mod policy;
pub mod selector;
pub mod stats;

pub use config::SelectorConfig;
pub use policy::{OpponentPolicy, UniformOpponent};
pub use selector::MonteCarloSelector;
pub use stats::{ActionScores, SearchStats};
