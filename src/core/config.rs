//! Rule and policy configuration.
//!
//! - `RulesConfig`: action costs and the round cap
//! - `StrategyConfig`: tuning knobs of the rule-based strategies
//!
//! Both are plain values with `Default` and `with_*` builders, and are
//! checked once with `validate()` before a game starts.

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::error::{CombatError, Result};

/// Costs and limits of the round-resolution engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Charge spent by Shoot (default: 2).
    pub shoot_cost: u32,

    /// Charge spent by Rocket (default: 3).
    pub rocket_cost: u32,

    /// Rounds after which a game ends without a winner (default: 1000).
    pub round_cap: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            shoot_cost: 2,
            rocket_cost: 3,
            round_cap: 1000,
        }
    }
}

impl RulesConfig {
    /// Set the Shoot cost.
    #[must_use]
    pub fn with_shoot_cost(mut self, cost: u32) -> Self {
        self.shoot_cost = cost;
        self
    }

    /// Set the Rocket cost.
    #[must_use]
    pub fn with_rocket_cost(mut self, cost: u32) -> Self {
        self.rocket_cost = cost;
        self
    }

    /// Set the round cap.
    #[must_use]
    pub fn with_round_cap(mut self, cap: u32) -> Self {
        self.round_cap = cap;
        self
    }

    /// Charge needed to perform `action`.
    #[must_use]
    pub const fn cost(&self, action: Action) -> u32 {
        match action {
            Action::Charge | Action::Protect => 0,
            Action::Shoot => self.shoot_cost,
            Action::Rocket => self.rocket_cost,
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.shoot_cost == 0 {
            return Err(CombatError::InvalidConfig("shoot_cost must be at least 1"));
        }
        if self.rocket_cost == 0 {
            return Err(CombatError::InvalidConfig("rocket_cost must be at least 1"));
        }
        if self.round_cap == 0 {
            return Err(CombatError::InvalidConfig("round_cap must be at least 1"));
        }
        Ok(())
    }
}

/// Tuning of the rule-based strategies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Charge an aggressive player holds before it commits to Shoot
    /// (default: 2). Never below the Shoot cost.
    pub aggressive_shoot_threshold: u32,

    /// Chance that an unprotected defensive player protects (default: 0.7).
    pub defensive_protect_probability: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            aggressive_shoot_threshold: 2,
            defensive_protect_probability: 0.7,
        }
    }
}

impl StrategyConfig {
    /// Set the aggressive Shoot threshold.
    #[must_use]
    pub fn with_shoot_threshold(mut self, threshold: u32) -> Self {
        self.aggressive_shoot_threshold = threshold;
        self
    }

    /// Set the defensive Protect probability.
    #[must_use]
    pub fn with_protect_probability(mut self, probability: f64) -> Self {
        self.defensive_protect_probability = probability;
        self
    }

    /// Check value ranges against the rules they will be used with.
    pub fn validate(&self, rules: &RulesConfig) -> Result<()> {
        if self.aggressive_shoot_threshold < rules.shoot_cost {
            return Err(CombatError::InvalidConfig(
                "aggressive_shoot_threshold must cover shoot_cost",
            ));
        }
        if !(0.0..=1.0).contains(&self.defensive_protect_probability) {
            return Err(CombatError::InvalidConfig(
                "defensive_protect_probability must be within [0, 1]",
            ));
        }
        Ok(())
    }
}
