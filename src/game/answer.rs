use crate::category::CategoryResolver;
use crate::error::AnswerError;
use crate::event::Narration;
use crate::presenter::Presenter;
use crate::question::QuestionSupplier;

use super::{Game, WINNING_PURSE};

impl<C, Q, P> Game<C, Q, P>
where
    C: CategoryResolver,
    Q: QuestionSupplier,
    P: Presenter,
{
    /// Records a correct answer for the current player and passes the turn.
    ///
    /// The answer counts unless the player is boxed and the getting-out flag
    /// is clear, in which case the turn simply passes. A counted answer adds
    /// one coin to the purse.
    ///
    /// Returns `false` once the purse reaches exactly six coins, and `true`
    /// otherwise (the game goes on). No check is made that a question is
    /// pending.
    ///
    /// # Errors
    ///
    /// Returns [`AnswerError::Registry`] if no player has been added.
    pub fn answered_correctly(&mut self) -> Result<bool, AnswerError> {
        let ordinal = self.registry.current()?.ordinal();

        if self.in_penalty_box(ordinal) && !self.getting_out {
            log::debug!("player {ordinal} is boxed; turn passes without credit");
            self.registry.give_turn_to_next_player()?;
            return Ok(true);
        }

        self.score(ordinal)
    }

    /// Records an incorrect answer: the current player goes to the penalty
    /// box and the turn passes. Always returns `true`.
    ///
    /// # Errors
    ///
    /// Returns [`AnswerError::Registry`] if no player has been added.
    pub fn answered_incorrectly(&mut self) -> Result<bool, AnswerError> {
        let player = self.registry.current()?;
        let ordinal = player.ordinal();

        self.presenter.narrate(&Narration::IncorrectAnswer);
        self.presenter.narrate(&Narration::SentToPenaltyBox {
            name: player.name(),
        });

        self.penalty_box.insert(ordinal, true);
        log::debug!("player {ordinal} sent to the penalty box");

        self.registry.give_turn_to_next_player()?;
        Ok(true)
    }

    /// Credits one coin, evaluates the purse, and passes the turn.
    fn score(&mut self, ordinal: usize) -> Result<bool, AnswerError> {
        let purse = self.purses.entry(ordinal).or_insert(0);
        *purse += 1;
        let coins = *purse;
        let not_a_winner = coins != WINNING_PURSE;
        log::debug!("player {ordinal} now has {coins} coins");

        let name = self.registry.current()?.name();
        self.presenter.narrate(&Narration::CorrectAnswer);
        self.presenter.narrate(&Narration::PurseUpdated { name, coins });

        self.registry.give_turn_to_next_player()?;
        Ok(not_a_winner)
    }
}
