use crate::category::CategoryResolver;
use crate::error::RollError;
use crate::event::Narration;
use crate::presenter::Presenter;
use crate::question::QuestionSupplier;

use super::Game;

impl<C, Q, P> Game<C, Q, P>
where
    C: CategoryResolver,
    Q: QuestionSupplier,
    P: Presenter,
{
    /// Rolls the die for the current player.
    ///
    /// A player outside the penalty box moves `value` squares and is asked a
    /// question. A boxed player moves and is asked only on an odd roll; the
    /// roll's parity is recorded in the shared getting-out flag.
    ///
    /// # Errors
    ///
    /// Returns [`RollError::NegativeRoll`] if `value` is negative,
    /// [`RollError::NotPlayable`] if fewer than two players joined, or
    /// [`RollError::Registry`] if the registry rejects the move (a roll of 0
    /// outside the penalty box). A failed roll changes nothing.
    pub fn roll(&mut self, value: i32) -> Result<(), RollError> {
        if value < 0 {
            return Err(RollError::NegativeRoll);
        }

        if !self.is_playable() {
            return Err(RollError::NotPlayable);
        }

        let ordinal = self.registry.current()?.ordinal();
        let boxed = self.in_penalty_box(ordinal);

        if boxed && value % 2 == 0 {
            self.getting_out = false;
            log::debug!("player {ordinal} rolled {value} and stays in the penalty box");

            let name = self.registry.current()?.name();
            self.presenter.narrate(&Narration::CurrentPlayer { name });
            self.presenter.narrate(&Narration::Rolled { value });
            self.presenter.narrate(&Narration::StayingInPenaltyBox { name });
            return Ok(());
        }

        let location = self.registry.move_current(value)?;
        if boxed {
            self.getting_out = true;
        }
        log::debug!("player {ordinal} rolled {value} and moved to {location}");

        let name = self.registry.current()?.name();
        self.presenter.narrate(&Narration::CurrentPlayer { name });
        self.presenter.narrate(&Narration::Rolled { value });
        if boxed {
            self.presenter.narrate(&Narration::LeavingPenaltyBox { name });
        }
        self.presenter.narrate(&Narration::Moved { name, location });

        self.ask_question(location);
        Ok(())
    }
}
