//! Policy layer: rule-based move selection.
//!
//! Policies read combat state and propose moves; they never mutate state.
//! The Monte-Carlo selector in `search` is the other way of picking moves.

pub mod strategy;

pub use strategy::{pick_target, random_legal_action, Strategy};
