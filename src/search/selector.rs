//! Monte-Carlo action selection for a two-participant confrontation.
//!
//! Every candidate action of the actor is scored by `num_simulations`
//! one-round rollouts against a sampled opponent action. Each rollout works
//! on copies of the two `PlayerState` values, resolves the round through the
//! `ResolutionEngine` with both sides aiming at each other, and scores +1 /
//! -1 / 0. The best total wins; ties are broken uniformly at random.
//!
//! Each candidate gets its own RNG, forked from the selector's RNG in
//! candidate order before any rollout runs. With the `parallel` feature the
//! candidates are scored on the rayon pool and the result is unchanged.

use std::time::Instant;

use tracing::debug;

use crate::core::{Action, CombatError, GameRng, Move, PlayerId, PlayerMap, PlayerState, Result, RoundRecord};
use crate::rules::ResolutionEngine;

use super::config::SelectorConfig;
use super::policy::{OpponentPolicy, UniformOpponent};
use super::stats::{ActionScores, SearchStats};

const ACTOR: PlayerId = PlayerId::new(0);
const OPPONENT: PlayerId = PlayerId::new(1);

/// Brute-force rollout selector.
pub struct MonteCarloSelector {
    /// Rules used for every rollout.
    engine: ResolutionEngine,

    /// Search configuration.
    config: SelectorConfig,

    /// RNG for forks and tie-breaks.
    rng: GameRng,

    /// Opponent modeling policy.
    opponent: Box<dyn OpponentPolicy>,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl MonteCarloSelector {
    /// Create a selector with a uniform random opponent model.
    pub fn new(engine: ResolutionEngine, config: SelectorConfig) -> Self {
        let rng = GameRng::new(config.seed);

        Self {
            engine,
            config,
            rng,
            opponent: Box::new(UniformOpponent),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom opponent policy.
    #[must_use]
    pub fn with_opponent<O: OpponentPolicy + 'static>(mut self, opponent: O) -> Self {
        self.opponent = Box::new(opponent);
        self
    }

    /// Pick the actor's action among all its legal actions, using the
    /// configured number of simulations.
    pub fn choose(&mut self, actor: &PlayerState, opponent: &PlayerState) -> Result<Action> {
        let legal = self.engine.legal_actions(actor);
        self.select_action(actor, opponent, &legal, self.config.num_simulations)
    }

    /// Pick the best of `legal_actions` for `actor` against `opponent`.
    ///
    /// With `num_simulations == 0` every score is zero and the pick is
    /// uniform over the candidates.
    pub fn select_action(
        &mut self,
        actor: &PlayerState,
        opponent: &PlayerState,
        legal_actions: &[Action],
        num_simulations: u32,
    ) -> Result<Action> {
        let scores = self.evaluate(actor, opponent, legal_actions, num_simulations)?;
        let best = scores.maximizers();
        let action = *self.rng.choose(&best).ok_or(CombatError::NoCandidates)?;

        debug!(
            scores = ?scores,
            chosen = %action,
            tied = best.len(),
            "selected action"
        );

        Ok(action)
    }

    /// Aggregate rollout score of every candidate, in candidate order.
    pub fn evaluate(
        &mut self,
        actor: &PlayerState,
        opponent: &PlayerState,
        legal_actions: &[Action],
        num_simulations: u32,
    ) -> Result<ActionScores> {
        self.check_preconditions(actor, opponent, legal_actions)?;

        let start = Instant::now();
        self.stats.reset();

        let forks: Vec<GameRng> = legal_actions.iter().map(|_| self.rng.fork()).collect();
        let totals = self.score_candidates(actor, opponent, legal_actions, forks, num_simulations)?;

        self.stats.candidates = legal_actions.len() as u32;
        self.stats.rollouts = u64::from(num_simulations) * legal_actions.len() as u64;
        self.stats.time_us = start.elapsed().as_micros() as u64;

        Ok(ActionScores::from_pairs(legal_actions.iter().copied().zip(totals)))
    }

    fn check_preconditions(&self, actor: &PlayerState, opponent: &PlayerState, legal_actions: &[Action]) -> Result<()> {
        if !actor.is_alive {
            return Err(CombatError::ActorDead(ACTOR));
        }
        if !opponent.is_alive {
            return Err(CombatError::TargetDead {
                player: ACTOR,
                target: OPPONENT,
            });
        }
        if legal_actions.is_empty() {
            return Err(CombatError::NoCandidates);
        }
        if let Some(&action) = legal_actions.iter().find(|&&a| !self.engine.is_legal(actor, a)) {
            return Err(CombatError::IllegalCandidate {
                action,
                charge: actor.charge,
            });
        }
        for (i, action) in legal_actions.iter().enumerate() {
            if legal_actions[..i].contains(action) {
                return Err(CombatError::DuplicateCandidate(*action));
            }
        }
        Ok(())
    }

    #[cfg(not(feature = "parallel"))]
    fn score_candidates(
        &self,
        actor: &PlayerState,
        opponent: &PlayerState,
        legal_actions: &[Action],
        forks: Vec<GameRng>,
        num_simulations: u32,
    ) -> Result<Vec<i64>> {
        legal_actions
            .iter()
            .zip(forks)
            .map(|(&action, mut rng)| self.score_candidate(action, actor, opponent, num_simulations, &mut rng))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn score_candidates(
        &self,
        actor: &PlayerState,
        opponent: &PlayerState,
        legal_actions: &[Action],
        forks: Vec<GameRng>,
        num_simulations: u32,
    ) -> Result<Vec<i64>> {
        use rayon::prelude::*;

        legal_actions
            .par_iter()
            .zip(forks.into_par_iter())
            .map(|(&action, mut rng)| self.score_candidate(action, actor, opponent, num_simulations, &mut rng))
            .collect()
    }

    fn score_candidate(
        &self,
        action: Action,
        actor: &PlayerState,
        opponent: &PlayerState,
        num_simulations: u32,
        rng: &mut GameRng,
    ) -> Result<i64> {
        let mut total = 0;
        for _ in 0..num_simulations {
            total += self.rollout(action, actor, opponent, rng)?;
        }
        Ok(total)
    }

    /// One simulated round from copies of both states.
    ///
    /// Shields never carry into a round, so the copies start unprotected.
    fn rollout(&self, action: Action, actor: &PlayerState, opponent: &PlayerState, rng: &mut GameRng) -> Result<i64> {
        let mut players = PlayerMap::new(2, |p| {
            let state = if p == ACTOR { actor } else { opponent };
            PlayerState::with_charge(state.charge)
        });

        let mut record = RoundRecord::new();
        record.submit(ACTOR, Move::aimed(action, OPPONENT))?;
        if let Some(reply) = self.opponent.choose_action(&self.engine, opponent, rng) {
            record.submit(OPPONENT, Move::aimed(reply, ACTOR))?;
        }

        self.engine.resolve(&mut players, &record)?;

        Ok(match (players[ACTOR].is_alive, players[OPPONENT].is_alive) {
            (true, false) => 1,
            (false, true) => -1,
            _ => 0,
        })
    }

    /// Get statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Get the engine reference.
    #[must_use]
    pub fn engine(&self) -> &ResolutionEngine {
        &self.engine
    }
}

impl std::fmt::Debug for MonteCarloSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonteCarloSelector")
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
