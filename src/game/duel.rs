//! Two-participant game where one seat is played by the Monte-Carlo selector.
//!
//! The other seat's actions come from outside (a human, a test, another
//! program). Both sides always aim at each other, and the bot decides from
//! the current states only, so it never sees the other side's choice.

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionSet, CombatError, Move, PlayerId, Result, RoundRecord, RulesConfig};
use crate::policy::Strategy;
use crate::rules::RoundSummary;
use crate::search::{MonteCarloSelector, SelectorConfig};

use super::game::{Game, GameBuilder, Seat};

/// Seat driven from outside.
pub const CHALLENGER: PlayerId = PlayerId::new(0);

/// Seat driven by the selector.
pub const BOT: PlayerId = PlayerId::new(1);

/// Actions played in one duel round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelRound {
    /// The challenger's action.
    pub challenger: Action,
    /// The bot's action.
    pub bot: Action,
    /// What the round did.
    pub summary: RoundSummary,
}

/// A challenger against a Monte-Carlo bot.
#[derive(Debug)]
pub struct Duel {
    game: Game,
    selector: MonteCarloSelector,
}

impl Duel {
    /// Create a duel. The selector seed also seeds the game.
    pub fn new(rules: RulesConfig, selector_config: SelectorConfig) -> Result<Self> {
        let seed = selector_config.seed;
        let game = GameBuilder::new()
            .seat(Seat::new("Challenger", Strategy::RandomLegal))
            .seat(Seat::new("Bot", Strategy::RandomLegal))
            .rules(rules)
            .build(seed)?;
        let selector = MonteCarloSelector::new(game.engine().clone(), selector_config);

        Ok(Self { game, selector })
    }

    /// The underlying game.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The bot's selector, for its statistics.
    #[must_use]
    pub fn selector(&self) -> &MonteCarloSelector {
        &self.selector
    }

    /// Actions currently legal for `player`.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> ActionSet {
        self.game
            .player(player)
            .map(|state| self.game.engine().legal_actions(state))
            .unwrap_or_default()
    }

    /// What the bot would play from the current position.
    pub fn bot_action(&mut self) -> Result<Action> {
        if self.game.is_over() {
            return Err(CombatError::GameOver);
        }
        let bot = self.game.players()[BOT];
        let challenger = self.game.players()[CHALLENGER];
        self.selector.choose(&bot, &challenger)
    }

    /// Play one round: the challenger's `action` against the bot's pick.
    ///
    /// An illegal challenger action is rejected before the bot searches.
    pub fn play(&mut self, action: Action) -> Result<DuelRound> {
        if self.game.is_over() {
            return Err(CombatError::GameOver);
        }

        let challenger = Move::aimed(action, BOT);
        let mut record = RoundRecord::new();
        record.submit(CHALLENGER, challenger)?;
        self.game.engine().validate(self.game.players(), &record)?;

        let bot = self.bot_action()?;
        record.submit(BOT, Move::aimed(bot, CHALLENGER))?;

        let summary = self.game.play_round(&record)?;
        Ok(DuelRound {
            challenger: action,
            bot,
            summary,
        })
    }
}
