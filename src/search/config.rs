//! Selector configuration parameters.

use serde::{Deserialize, Serialize};

/// Monte-Carlo selector configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Rollouts per candidate action (default: 1000).
    /// More rollouts give steadier scores at linear cost.
    pub num_simulations: u32,

    /// Random seed for rollouts and tie-breaks.
    /// Same seed produces the same decisions.
    pub seed: u64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            num_simulations: 1000,
            seed: 42,
        }
    }
}

impl SelectorConfig {
    /// Set the number of rollouts per candidate.
    #[must_use]
    pub fn with_simulations(mut self, num_simulations: u32) -> Self {
        self.num_simulations = num_simulations;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
