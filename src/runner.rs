//! Seeded game-loop driver.
//!
//! [`Runner`] plays a game to completion with a deterministic die and
//! deterministic answer outcomes, the way the classic trivia console runner
//! does: roll a six-sided die, then answer incorrectly one time in nine.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::category::CategoryResolver;
use crate::error::RunError;
use crate::game::Game;
use crate::presenter::Presenter;
use crate::question::QuestionSupplier;

/// How a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Number of turns played, including the winning one.
    pub turns: usize,
    /// Ordinal of the player whose answer ended the game.
    pub winner: usize,
}

/// Drives a [`Game`] with seeded dice and answers.
#[derive(Debug, Clone)]
pub struct Runner {
    rng: ChaCha8Rng,
}

impl Runner {
    /// Creates a runner with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use trivia::{DeckOptions, Game, QuestionDeck, Runner, SilentPresenter, StandardBoard};
    ///
    /// let mut game = Game::new(StandardBoard, QuestionDeck::new(DeckOptions::default()), SilentPresenter);
    /// game.add_player("Chet");
    /// game.add_player("Pat");
    /// game.add_player("Sue");
    ///
    /// let outcome = Runner::new(42).play(&mut game, 10_000).unwrap();
    /// assert_eq!(game.purse(outcome.winner), Some(6));
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Rolls a six-sided die.
    pub fn roll_die(&mut self) -> i32 {
        self.rng.random_range(1..=6)
    }

    /// Decides whether the pending question is answered incorrectly.
    pub fn answers_wrong(&mut self) -> bool {
        self.rng.random_range(0..9) == 7
    }

    /// Plays turns until a player wins or `max_turns` turns have elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::TurnLimit`] if nobody wins in time, or the
    /// underlying engine error if a roll or answer is rejected (for example
    /// when fewer than two players joined).
    pub fn play<C, Q, P>(
        &mut self,
        game: &mut Game<C, Q, P>,
        max_turns: usize,
    ) -> Result<RunOutcome, RunError>
    where
        C: CategoryResolver,
        Q: QuestionSupplier,
        P: Presenter,
    {
        for turn in 1..=max_turns {
            let ordinal = game.current_player()?.ordinal();

            game.roll(self.roll_die())?;
            let not_a_winner = if self.answers_wrong() {
                game.answered_incorrectly()?
            } else {
                game.answered_correctly()?
            };

            if !not_a_winner {
                log::debug!("player {ordinal} won after {turn} turns");
                return Ok(RunOutcome {
                    turns: turn,
                    winner: ordinal,
                });
            }
        }

        Err(RunError::TurnLimit)
    }
}
