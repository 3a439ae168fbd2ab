//! Game engine and state management.

use alloc::string::String;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::category::CategoryResolver;
use crate::error::RegistryError;
use crate::event::Narration;
use crate::player::Player;
use crate::presenter::Presenter;
use crate::question::QuestionSupplier;
use crate::registry::PlayerRegistry;

mod answer;
mod roll;

/// Minimum number of players before the die may be rolled.
pub const MIN_PLAYERS: usize = 2;

/// Purse size that ends the game.
pub const WINNING_PURSE: u32 = 6;

/// A trivia game engine that manages turn order, the penalty box, and purses.
///
/// The engine is generic over its three collaborators: a
/// [`CategoryResolver`] for board squares, a [`QuestionSupplier`], and a
/// [`Presenter`]. Pass them by value, by `&mut`, or boxed as trait objects.
///
/// # Getting out of the penalty box
///
/// Whether the last boxed roll was odd is kept in a single flag shared by
/// all players (see [`Game::is_getting_out_of_penalty_box`]), not one flag
/// per player. It is set by every roll of a boxed player and read by the next
/// [`Game::answered_correctly`]. A roll by a player outside the box leaves it
/// untouched, so answer outcomes must follow the roll of the same turn.
///
/// # Example
///
/// ```
/// use trivia::{DeckOptions, Game, QuestionDeck, SilentPresenter, StandardBoard};
///
/// let mut game = Game::new(
///     StandardBoard,
///     QuestionDeck::new(DeckOptions::default()),
///     SilentPresenter,
/// );
/// game.add_player("Alice");
/// game.add_player("Bob");
///
/// game.roll(5).unwrap();
/// assert_eq!(game.current_player_location(), Ok(5));
/// assert_eq!(game.answered_correctly(), Ok(true));
/// assert_eq!(game.current_player_name(), Ok("Bob"));
/// ```
#[derive(Debug, Clone)]
pub struct Game<C, Q, P> {
    registry: PlayerRegistry,
    categories: C,
    questions: Q,
    presenter: P,
    /// Penalty box flags (`ordinal` -> boxed).
    penalty_box: HashMap<usize, bool>,
    /// Gold coins (`ordinal` -> purse).
    purses: HashMap<usize, u32>,
    /// Whether the most recent boxed roll was odd.
    getting_out: bool,
}

/// A game wired with the standard board, a default question deck, and
/// console output.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub type StandardGame =
    Game<crate::StandardBoard, crate::QuestionDeck, crate::presenter::ConsolePresenter>;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl StandardGame {
    /// Creates a game with the standard board, 50 questions per category,
    /// and narration printed to standard output.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            crate::StandardBoard,
            crate::QuestionDeck::new(crate::DeckOptions::default()),
            crate::presenter::ConsolePresenter,
        )
    }
}

impl<C, Q, P> Game<C, Q, P>
where
    C: CategoryResolver,
    Q: QuestionSupplier,
    P: Presenter,
{
    /// Creates a game with no players.
    #[must_use]
    pub fn new(categories: C, questions: Q, presenter: P) -> Self {
        Self {
            registry: PlayerRegistry::new(),
            categories,
            questions,
            presenter,
            penalty_box: HashMap::new(),
            purses: HashMap::new(),
            getting_out: false,
        }
    }

    /// Returns whether enough players joined to start rolling.
    pub const fn is_playable(&self) -> bool {
        self.registry.count() >= MIN_PLAYERS
    }

    /// Adds a player with an empty purse outside the penalty box.
    ///
    /// Returns the assigned ordinal.
    pub fn add_player(&mut self, name: impl Into<String>) -> usize {
        let ordinal = self.registry.add(name);
        self.purses.insert(ordinal, 0);
        self.penalty_box.insert(ordinal, false);

        let name = self.registry.players()[ordinal].name();
        log::debug!("player {ordinal} ({name}) joined");
        self.presenter.narrate(&Narration::PlayerAdded {
            name,
            number: ordinal + 1,
        });

        ordinal
    }

    /// Returns the number of players.
    pub const fn player_count(&self) -> usize {
        self.registry.count()
    }

    /// Returns the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NoPlayers`] if no player has been added.
    pub fn current_player(&self) -> Result<&Player, RegistryError> {
        self.registry.current()
    }

    /// Returns the name of the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NoPlayers`] if no player has been added.
    pub fn current_player_name(&self) -> Result<&str, RegistryError> {
        self.registry.current().map(Player::name)
    }

    /// Returns the raw board location of the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NoPlayers`] if no player has been added.
    pub fn current_player_location(&self) -> Result<usize, RegistryError> {
        self.registry.current().map(Player::location)
    }

    /// Returns all players in join order.
    pub fn players(&self) -> &[Player] {
        self.registry.players()
    }

    /// Returns the purse of the player with the given ordinal.
    pub fn purse(&self, ordinal: usize) -> Option<u32> {
        self.purses.get(&ordinal).copied()
    }

    /// Returns whether the player with the given ordinal is in the penalty box.
    pub fn is_in_penalty_box(&self, ordinal: usize) -> Option<bool> {
        self.penalty_box.get(&ordinal).copied()
    }

    /// Returns the shared getting-out flag: whether the most recent roll made
    /// by a boxed player was odd.
    ///
    /// This flag is not tracked per player. It is only meaningful between a
    /// boxed player's roll and the answer outcome of that same turn.
    pub const fn is_getting_out_of_penalty_box(&self) -> bool {
        self.getting_out
    }

    /// Returns the category resolver.
    pub const fn categories(&self) -> &C {
        &self.categories
    }

    /// Returns the question supplier.
    pub const fn questions(&self) -> &Q {
        &self.questions
    }

    /// Returns the presenter.
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the presenter mutably.
    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consumes the game and returns its collaborators.
    pub fn into_parts(self) -> (C, Q, P) {
        (self.categories, self.questions, self.presenter)
    }

    fn in_penalty_box(&self, ordinal: usize) -> bool {
        self.penalty_box.get(&ordinal).copied().unwrap_or(false)
    }

    /// Resolves the category for `location`, draws a question, and hands
    /// both to the presenter.
    fn ask_question(&mut self, location: usize) {
        let category = self.categories.resolve_category(location);
        let question = self.questions.next_question(&category);
        log::trace!("asking {category} question at location {location}");
        self.presenter.present(&category, &question);
    }
}
