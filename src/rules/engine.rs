//! Round resolution: how simultaneous moves interact.
//!
//! A round is resolved in a fixed order that does not depend on submission
//! order, because later phases read state written by earlier ones:
//!
//! 1. attackers pay for Shoot/Rocket (whether or not the attack kills)
//! 2. Protect actors raise their shields
//! 3. rockets kill their live targets, shields or not
//! 4. shots kill live targets without a shield
//! 5. Charge actors gain one charge
//! 6. every shield drops
//!
//! All moves are simultaneous: a participant killed in this round still has
//! its own move applied.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{
    Action, ActionSet, CombatError, Move, PlayerId, PlayerMap, PlayerState, Result, RoundRecord,
    RulesConfig,
};

/// Why a game ended without a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawReason {
    /// The last participants eliminated each other.
    NoSurvivors,
    /// The round cap was reached with two or more participants alive.
    RoundCap,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Exactly one participant survived.
    Winner(PlayerId),
    /// No winner.
    Draw(DrawReason),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winner, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw(_) => None,
        }
    }
}

/// True iff at most one participant is alive.
#[must_use]
pub fn is_game_over(players: &PlayerMap<PlayerState>) -> bool {
    players.alive_count() <= 1
}

/// Result implied by the survivors, or `None` while two or more live.
#[must_use]
pub fn survivor_result(players: &PlayerMap<PlayerState>) -> Option<GameResult> {
    let mut alive = players.alive();
    match (alive.next(), alive.next()) {
        (None, _) => Some(GameResult::Draw(DrawReason::NoSurvivors)),
        (Some(winner), None) => Some(GameResult::Winner(winner)),
        _ => None,
    }
}

/// What happened during one resolved round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Participants eliminated this round, in elimination order.
    pub eliminated: SmallVec<[PlayerId; 4]>,
    /// Rockets fired.
    pub rockets_fired: u32,
    /// Shots fired.
    pub shots_fired: u32,
    /// Shots that hit a shield.
    pub shots_blocked: u32,
}

/// Applies rounds of simultaneous moves under a fixed set of rules.
#[derive(Clone, Debug, Default)]
pub struct ResolutionEngine {
    rules: RulesConfig,
}

impl ResolutionEngine {
    /// Create an engine, rejecting out-of-range rules.
    pub fn new(rules: RulesConfig) -> Result<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// The rules this engine applies.
    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Actions `state` may choose, in enumeration order.
    ///
    /// Empty for a dead participant.
    #[must_use]
    pub fn legal_actions(&self, state: &PlayerState) -> ActionSet {
        if !state.is_alive {
            return ActionSet::new();
        }
        Action::ALL
            .into_iter()
            .filter(|&action| state.can_afford(self.rules.cost(action)))
            .collect()
    }

    /// Whether `state` may choose `action`.
    #[must_use]
    pub fn is_legal(&self, state: &PlayerState, action: Action) -> bool {
        state.is_alive && state.can_afford(self.rules.cost(action))
    }

    /// Check a whole round record without touching any state.
    pub fn validate(&self, players: &PlayerMap<PlayerState>, record: &RoundRecord) -> Result<()> {
        record
            .iter()
            .try_for_each(|(actor, mv)| self.validate_move(players, actor, mv))
    }

    fn validate_move(&self, players: &PlayerMap<PlayerState>, actor: PlayerId, mv: &Move) -> Result<()> {
        let state = players.get(actor).ok_or(CombatError::UnknownPlayer(actor))?;
        if !state.is_alive {
            return Err(CombatError::ActorDead(actor));
        }

        let cost = self.rules.cost(mv.action);
        if !state.can_afford(cost) {
            return Err(CombatError::InsufficientCharge {
                player: actor,
                action: mv.action,
                charge: state.charge,
                cost,
            });
        }

        match (mv.action.is_attack(), mv.target) {
            (true, None) => Err(CombatError::MissingTarget {
                player: actor,
                action: mv.action,
            }),
            (false, Some(_)) => Err(CombatError::UnexpectedTarget {
                player: actor,
                action: mv.action,
            }),
            (false, None) => Ok(()),
            (true, Some(target)) => {
                if target == actor {
                    return Err(CombatError::SelfTarget(actor));
                }
                let target_state = players.get(target).ok_or(CombatError::UnknownPlayer(target))?;
                if !target_state.is_alive {
                    return Err(CombatError::TargetDead { player: actor, target });
                }
                Ok(())
            }
        }
    }

    /// Apply one round to `players`.
    ///
    /// The record is validated first; on error nothing is mutated.
    pub fn resolve(
        &self,
        players: &mut PlayerMap<PlayerState>,
        record: &RoundRecord,
    ) -> Result<RoundSummary> {
        self.validate(players, record)?;

        let mut summary = RoundSummary::default();

        for (actor, mv) in record.iter() {
            trace!(%actor, %mv, "move");
            players[actor].charge -= self.rules.cost(mv.action);
        }

        for (actor, _) in record.with_action(Action::Protect) {
            players[actor].is_protected = true;
        }

        for (_, target) in record.with_action(Action::Rocket) {
            summary.rockets_fired += 1;
            let Some(target) = target else { continue };
            let victim = &mut players[target];
            if victim.is_alive {
                victim.is_alive = false;
                summary.eliminated.push(target);
            }
        }

        for (_, target) in record.with_action(Action::Shoot) {
            summary.shots_fired += 1;
            let Some(target) = target else { continue };
            let victim = &mut players[target];
            if !victim.is_alive {
                continue;
            }
            if victim.is_protected {
                summary.shots_blocked += 1;
            } else {
                victim.is_alive = false;
                summary.eliminated.push(target);
            }
        }

        for (actor, _) in record.with_action(Action::Charge) {
            let state = &mut players[actor];
            state.charge = state.charge.saturating_add(1);
        }

        for (_, state) in players.iter_mut() {
            state.is_protected = false;
        }

        debug!(
            eliminated = ?summary.eliminated,
            blocked = summary.shots_blocked,
            alive = players.alive_count(),
            "round resolved"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ResolutionEngine {
        ResolutionEngine::new(RulesConfig::default()).unwrap()
    }

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id)
    }

    #[test]
    fn test_legal_actions_by_charge() {
        let engine = engine();

        let none = engine.legal_actions(&PlayerState::with_charge(0));
        assert_eq!(none.as_slice(), &[Action::Charge, Action::Protect]);

        let shoot = engine.legal_actions(&PlayerState::with_charge(2));
        assert_eq!(shoot.as_slice(), &[Action::Charge, Action::Protect, Action::Shoot]);

        let all = engine.legal_actions(&PlayerState::with_charge(3));
        assert_eq!(all.as_slice(), &Action::ALL);

        let mut dead = PlayerState::with_charge(5);
        dead.is_alive = false;
        assert!(engine.legal_actions(&dead).is_empty());
        assert!(!engine.is_legal(&dead, Action::Charge));
    }

    #[test]
    fn test_engine_rejects_bad_rules() {
        let rules = RulesConfig::default().with_rocket_cost(0);
        assert!(ResolutionEngine::new(rules).is_err());
    }

    #[test]
    fn test_shoot_kills_unprotected() {
        let engine = engine();
        let mut players = PlayerMap::new(2, |_| PlayerState::with_charge(2));
        let record = RoundRecord::from_moves([(p(0), Move::shoot(p(1))), (p(1), Move::charge())]).unwrap();

        let summary = engine.resolve(&mut players, &record).unwrap();

        assert!(!players[p(1)].is_alive);
        assert_eq!(players[p(0)].charge, 0);
        assert_eq!(players[p(1)].charge, 3);
        assert_eq!(summary.eliminated.as_slice(), &[p(1)]);
        assert_eq!(summary.shots_fired, 1);
    }

    #[test]
    fn test_shoot_blocked_by_same_round_protect() {
        let engine = engine();
        let mut players = PlayerMap::new(2, |_| PlayerState::with_charge(2));
        let record = RoundRecord::from_moves([(p(1), Move::protect()), (p(0), Move::shoot(p(1)))]).unwrap();

        let summary = engine.resolve(&mut players, &record).unwrap();

        assert!(players[p(1)].is_alive);
        assert_eq!(players[p(0)].charge, 0, "shooter pays even when blocked");
        assert_eq!(summary.shots_blocked, 1);
        assert!(summary.eliminated.is_empty());
        assert!(!players[p(1)].is_protected, "shield drops at round end");
    }

    #[test]
    fn test_rocket_ignores_protect() {
        let engine = engine();
        let mut players = PlayerMap::new(2, |_| PlayerState::with_charge(3));
        let record = RoundRecord::from_moves([(p(1), Move::protect()), (p(0), Move::rocket(p(1)))]).unwrap();

        engine.resolve(&mut players, &record).unwrap();

        assert!(!players[p(1)].is_alive);
        assert_eq!(players[p(0)].charge, 0);
    }

    #[test]
    fn test_mutual_shots_both_die() {
        let engine = engine();
        let mut players = PlayerMap::new(2, |_| PlayerState::with_charge(2));
        let record = RoundRecord::from_moves([(p(0), Move::shoot(p(1))), (p(1), Move::shoot(p(0)))]).unwrap();

        let summary = engine.resolve(&mut players, &record).unwrap();

        assert_eq!(players.alive_count(), 0);
        assert_eq!(summary.eliminated.len(), 2);
        assert_eq!(survivor_result(&players), Some(GameResult::Draw(DrawReason::NoSurvivors)));
    }

    #[test]
    fn test_rocketed_target_is_not_shot_again() {
        let engine = engine();
        let mut players = PlayerMap::new(3, |_| PlayerState::with_charge(3));
        let record = RoundRecord::from_moves([
            (p(0), Move::shoot(p(2))),
            (p(1), Move::rocket(p(2))),
            (p(2), Move::charge()),
        ])
        .unwrap();

        let summary = engine.resolve(&mut players, &record).unwrap();

        assert_eq!(summary.eliminated.as_slice(), &[p(2)]);
        assert_eq!(summary.shots_blocked, 0);
        assert_eq!(players[p(2)].charge, 4, "simultaneous charge still lands");
    }

    #[test]
    fn test_invalid_record_leaves_state_untouched() {
        let engine = engine();
        let mut players = PlayerMap::new(3, |_| PlayerState::with_charge(2));
        let before = players.clone();
        let record = RoundRecord::from_moves([
            (p(0), Move::shoot(p(1))),
            (p(2), Move::rocket(p(0))),
        ])
        .unwrap();

        let err = engine.resolve(&mut players, &record).unwrap_err();

        assert_eq!(
            err,
            CombatError::InsufficientCharge {
                player: p(2),
                action: Action::Rocket,
                charge: 2,
                cost: 3,
            }
        );
        assert_eq!(players, before);
    }

    #[test]
    fn test_target_validation() {
        let engine = engine();
        let mut players = PlayerMap::new(3, |_| PlayerState::with_charge(3));
        players[p(2)].is_alive = false;

        let check = |mv: Move| {
            let record = RoundRecord::from_moves([(p(0), mv)]).unwrap();
            engine.validate(&players, &record)
        };

        assert_eq!(check(Move::shoot(p(0))), Err(CombatError::SelfTarget(p(0))));
        assert_eq!(
            check(Move::rocket(p(2))),
            Err(CombatError::TargetDead { player: p(0), target: p(2) })
        );
        assert_eq!(check(Move::shoot(p(9))), Err(CombatError::UnknownPlayer(p(9))));
        assert_eq!(
            check(Move { action: Action::Shoot, target: None }),
            Err(CombatError::MissingTarget { player: p(0), action: Action::Shoot })
        );
        assert_eq!(
            check(Move { action: Action::Charge, target: Some(p(1)) }),
            Err(CombatError::UnexpectedTarget { player: p(0), action: Action::Charge })
        );
        assert!(check(Move::rocket(p(1))).is_ok());
    }

    #[test]
    fn test_charge_saturates() {
        let engine = engine();
        let mut players = PlayerMap::new(2, |_| PlayerState::with_charge(u32::MAX));
        let record = RoundRecord::from_moves([(p(0), Move::charge())]).unwrap();

        engine.resolve(&mut players, &record).unwrap();

        assert_eq!(players[p(0)].charge, u32::MAX);
    }

    #[test]
    fn test_dead_actor_rejected() {
        let engine = engine();
        let mut players: PlayerMap<PlayerState> = PlayerMap::with_default(2);
        players[p(1)].is_alive = false;
        let record = RoundRecord::from_moves([(p(1), Move::charge())]).unwrap();

        assert_eq!(engine.resolve(&mut players, &record), Err(CombatError::ActorDead(p(1))));
    }

    #[test]
    fn test_game_over() {
        let mut players: PlayerMap<PlayerState> = PlayerMap::with_default(3);
        assert!(!is_game_over(&players));
        assert_eq!(survivor_result(&players), None);

        players[p(0)].is_alive = false;
        assert!(!is_game_over(&players));

        players[p(2)].is_alive = false;
        assert!(is_game_over(&players));
        assert_eq!(survivor_result(&players), Some(GameResult::Winner(p(1))));
        assert!(survivor_result(&players).is_some_and(|r| r.is_winner(p(1))));
    }
}
