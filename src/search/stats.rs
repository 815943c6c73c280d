//! Per-action scores and search statistics.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Action, ActionSet};

/// Aggregate rollout score of each candidate action.
///
/// A rollout scores +1 when only the actor survives, -1 when only the
/// opponent survives, 0 otherwise.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionScores {
    entries: SmallVec<[(Action, i64); 4]>,
}

impl ActionScores {
    /// Scores in candidate order.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Action, i64)>) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Score of `action`, if it was a candidate.
    #[must_use]
    pub fn get(&self, action: Action) -> Option<i64> {
        self.entries
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, score)| *score)
    }

    /// Iterate over (action, score) pairs in candidate order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, i64)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there were no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest score, if any.
    #[must_use]
    pub fn best_score(&self) -> Option<i64> {
        self.entries.iter().map(|(_, score)| *score).max()
    }

    /// Every action sharing the highest score, in candidate order.
    #[must_use]
    pub fn maximizers(&self) -> ActionSet {
        let Some(best) = self.best_score() else {
            return ActionSet::new();
        };
        self.entries
            .iter()
            .filter(|(_, score)| *score == best)
            .map(|(action, _)| *action)
            .collect()
    }
}

/// Statistics of the last search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Candidate actions scored.
    pub candidates: u32,

    /// Rollouts performed across all candidates.
    pub rollouts: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate rollouts per second.
    #[must_use]
    pub fn rollouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.rollouts as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximizers_keep_candidate_order() {
        let scores = ActionScores::from_pairs([
            (Action::Charge, 4),
            (Action::Protect, -2),
            (Action::Rocket, 4),
        ]);

        assert_eq!(scores.best_score(), Some(4));
        assert_eq!(scores.maximizers().as_slice(), &[Action::Charge, Action::Rocket]);
        assert_eq!(scores.get(Action::Protect), Some(-2));
        assert_eq!(scores.get(Action::Shoot), None);
    }

    #[test]
    fn test_empty_scores() {
        let scores = ActionScores::default();
        assert!(scores.is_empty());
        assert_eq!(scores.best_score(), None);
        assert!(scores.maximizers().is_empty());
    }

    #[test]
    fn test_rollouts_per_second() {
        let mut stats = SearchStats {
            candidates: 4,
            rollouts: 4000,
            time_us: 2_000_000,
        };
        assert_eq!(stats.rollouts_per_second(), 2000.0);

        stats.reset();
        assert_eq!(stats.rollouts, 0);
        assert_eq!(stats.rollouts_per_second(), 0.0);
    }
}
