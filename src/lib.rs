//! A turn and game-state engine for a multiplayer trivia board game, with
//! optional `no_std` support.
//!
//! Players roll a die, move around a circular board, answer a question from
//! the category of the square they land on, and collect gold coins. A wrong
//! answer sends a player to the penalty box, which they leave for a turn only
//! by rolling odd.
//!
//! The crate provides a [`Game`] engine built on a [`PlayerRegistry`] for turn
//! order. Category lookup, question supply, and output are injected through
//! the [`CategoryResolver`], [`QuestionSupplier`], and [`Presenter`] traits;
//! standard implementations ship with the crate.
//!
//! # Example
//!
//! ```
//! use trivia::{DeckOptions, Game, QuestionDeck, SilentPresenter, StandardBoard};
//!
//! let mut game = Game::new(StandardBoard, QuestionDeck::new(DeckOptions::default()), SilentPresenter);
//! game.add_player("Alice");
//! game.add_player("Bob");
//! assert!(game.is_playable());
//!
//! game.roll(3).unwrap();
//! let not_a_winner = game.answered_correctly().unwrap();
//! assert!(not_a_winner);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod category;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod player;
pub mod presenter;
pub mod question;
pub mod registry;
pub mod runner;

// Re-export main types
pub use category::{BOARD_SIZE, Category, CategoryResolver, StandardBoard};
pub use error::{AnswerError, RegistryError, RollError, RunError};
pub use event::Narration;
#[cfg(feature = "std")]
pub use game::StandardGame;
pub use game::{Game, MIN_PLAYERS, WINNING_PURSE};
pub use options::{DEFAULT_QUESTIONS_PER_CATEGORY, DeckOptions};
pub use player::Player;
#[cfg(feature = "std")]
pub use presenter::ConsolePresenter;
pub use presenter::{Presenter, SilentPresenter};
pub use question::{QuestionDeck, QuestionSupplier};
pub use registry::PlayerRegistry;
pub use runner::{RunOutcome, Runner};
