//! Action vocabulary, moves and the per-round record.
//!
//! An [`Action`] is one of the four fixed verbs. A [`Move`] is an action plus
//! its target (Shoot and Rocket only). A [`RoundRecord`] collects the moves
//! every living participant submits for one simultaneous round.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{CombatError, Result};
use super::player::PlayerId;

/// The fixed action vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Gain one charge.
    Charge,
    /// Shield against Shoot for this round.
    Protect,
    /// Attack that protection blocks.
    Shoot,
    /// Attack that ignores protection.
    Rocket,
}

impl Action {
    /// Every action, in enumeration order.
    pub const ALL: [Action; 4] = [Action::Charge, Action::Protect, Action::Shoot, Action::Rocket];

    /// Whether the action needs a target.
    #[must_use]
    pub const fn is_attack(self) -> bool {
        matches!(self, Action::Shoot | Action::Rocket)
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Action::Charge => "Charge",
            Action::Protect => "Protect",
            Action::Shoot => "Shoot",
            Action::Rocket => "Rocket",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of actions; at most four, so it never allocates.
pub type ActionSet = SmallVec<[Action; 4]>;

/// An action together with its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// What the participant does.
    pub action: Action,
    /// Who is attacked; `None` for Charge and Protect.
    pub target: Option<PlayerId>,
}

impl Move {
    /// Gain one charge.
    #[must_use]
    pub const fn charge() -> Self {
        Self {
            action: Action::Charge,
            target: None,
        }
    }

    /// Shield for this round.
    #[must_use]
    pub const fn protect() -> Self {
        Self {
            action: Action::Protect,
            target: None,
        }
    }

    /// Shoot at `target`.
    #[must_use]
    pub const fn shoot(target: PlayerId) -> Self {
        Self {
            action: Action::Shoot,
            target: Some(target),
        }
    }

    /// Fire a rocket at `target`.
    #[must_use]
    pub const fn rocket(target: PlayerId) -> Self {
        Self {
            action: Action::Rocket,
            target: Some(target),
        }
    }

    /// Build a move for `action`, attaching `target` only to attacks.
    #[must_use]
    pub const fn aimed(action: Action, target: PlayerId) -> Self {
        if action.is_attack() {
            Self {
                action,
                target: Some(target),
            }
        } else {
            Self {
                action,
                target: None,
            }
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.target {
            Some(target) => write!(f, "{} -> {}", self.action, target),
            None => write!(f, "{}", self.action),
        }
    }
}

/// Moves submitted for one round, at most one per participant.
///
/// Entries keep submission order, but resolution never depends on it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundRecord {
    entries: SmallVec<[(PlayerId, Move); 4]>,
}

impl RoundRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from (actor, move) pairs.
    ///
    /// Fails on the first participant that appears twice.
    pub fn from_moves(moves: impl IntoIterator<Item = (PlayerId, Move)>) -> Result<Self> {
        let mut record = Self::new();
        for (player, mv) in moves {
            record.submit(player, mv)?;
        }
        Ok(record)
    }

    /// Add `player`'s move for this round.
    pub fn submit(&mut self, player: PlayerId, mv: Move) -> Result<()> {
        if self.contains(player) {
            return Err(CombatError::DuplicateActor(player));
        }
        self.entries.push((player, mv));
        Ok(())
    }

    /// The move submitted by `player`, if any.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&Move> {
        self.entries
            .iter()
            .find(|(p, _)| *p == player)
            .map(|(_, mv)| mv)
    }

    /// Whether `player` has submitted a move.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.entries.iter().any(|(p, _)| *p == player)
    }

    /// Iterate over (actor, move) pairs in submission order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Move)> {
        self.entries.iter().map(|(p, mv)| (*p, mv))
    }

    /// Actors choosing `action`, with their targets.
    pub fn with_action(&self, action: Action) -> impl Iterator<Item = (PlayerId, Option<PlayerId>)> + '_ {
        self.entries
            .iter()
            .filter(move |(_, mv)| mv.action == action)
            .map(|(p, mv)| (*p, mv.target))
    }

    /// Number of submitted moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nobody has submitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_actions() {
        assert!(!Action::Charge.is_attack());
        assert!(!Action::Protect.is_attack());
        assert!(Action::Shoot.is_attack());
        assert!(Action::Rocket.is_attack());
    }

    #[test]
    fn test_aimed_drops_target_for_non_attacks() {
        let target = PlayerId::new(1);
        assert_eq!(Move::aimed(Action::Charge, target), Move::charge());
        assert_eq!(Move::aimed(Action::Protect, target), Move::protect());
        assert_eq!(Move::aimed(Action::Shoot, target), Move::shoot(target));
        assert_eq!(Move::aimed(Action::Rocket, target), Move::rocket(target));
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::charge().to_string(), "Charge");
        assert_eq!(Move::rocket(PlayerId::new(1)).to_string(), "Rocket -> Player 2");
    }

    #[test]
    fn test_record_rejects_duplicates() {
        let mut record = RoundRecord::new();
        record.submit(PlayerId::new(0), Move::charge()).unwrap();

        let err = record.submit(PlayerId::new(0), Move::protect()).unwrap_err();
        assert_eq!(err, CombatError::DuplicateActor(PlayerId::new(0)));
        assert_eq!(record.get(PlayerId::new(0)), Some(&Move::charge()));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_record_with_action() {
        let record = RoundRecord::from_moves([
            (PlayerId::new(0), Move::shoot(PlayerId::new(2))),
            (PlayerId::new(1), Move::charge()),
            (PlayerId::new(2), Move::shoot(PlayerId::new(0))),
        ])
        .unwrap();

        let shots: Vec<_> = record.with_action(Action::Shoot).collect();
        assert_eq!(
            shots,
            vec![
                (PlayerId::new(0), Some(PlayerId::new(2))),
                (PlayerId::new(2), Some(PlayerId::new(0))),
            ]
        );
        assert!(record.with_action(Action::Rocket).next().is_none());
    }

    #[test]
    fn test_action_serialization() {
        let mv = Move::rocket(PlayerId::new(3));
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
