//! Error type shared by the engine, policies, selector and driver.
//!
//! Every variant is a precondition violation: callers that only submit
//! moves produced by the policy layer never see them.

use thiserror::Error;

use super::action::Action;
use super::player::PlayerId;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CombatError>;

/// Precondition violations surfaced by the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombatError {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// A game needs at least two participants.
    #[error("a game needs at least 2 participants, got {0}")]
    NotEnoughPlayers(usize),

    /// The id does not belong to this game.
    #[error("{0} is not part of this game")]
    UnknownPlayer(PlayerId),

    /// Dead participants never act.
    #[error("{0} is dead and cannot act")]
    ActorDead(PlayerId),

    /// A round record holds at most one move per participant.
    #[error("{0} already submitted a move this round")]
    DuplicateActor(PlayerId),

    /// The actor cannot pay for the action.
    #[error("{player} has {charge} charge but {action} costs {cost}")]
    InsufficientCharge {
        /// Acting participant.
        player: PlayerId,
        /// Requested action.
        action: Action,
        /// Charge held.
        charge: u32,
        /// Charge required.
        cost: u32,
    },

    /// Shoot and Rocket need a target.
    #[error("{player} chose {action} without a target")]
    MissingTarget {
        /// Acting participant.
        player: PlayerId,
        /// Requested action.
        action: Action,
    },

    /// Charge and Protect take no target.
    #[error("{player} chose {action}, which takes no target")]
    UnexpectedTarget {
        /// Acting participant.
        player: PlayerId,
        /// Requested action.
        action: Action,
    },

    /// Nobody may attack themselves.
    #[error("{0} cannot target itself")]
    SelfTarget(PlayerId),

    /// Dead participants are never valid targets.
    #[error("{player} targeted {target}, who is already dead")]
    TargetDead {
        /// Acting participant.
        player: PlayerId,
        /// Requested target.
        target: PlayerId,
    },

    /// The selector was given nothing to choose from.
    #[error("no candidate actions to evaluate")]
    NoCandidates,

    /// A candidate handed to the selector is not legal for the actor.
    #[error("{action} is not legal with {charge} charge")]
    IllegalCandidate {
        /// Offending candidate.
        action: Action,
        /// Charge held by the actor.
        charge: u32,
    },

    /// A candidate action was listed more than once.
    #[error("{0} is listed more than once as a candidate")]
    DuplicateCandidate(Action),

    /// The game has already ended.
    #[error("the game is already over")]
    GameOver,
}
