//! Error types for game operations.

use thiserror::Error;

/// Errors raised by the turn registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No player has been added yet, so there is no current player.
    #[error("no players have been added")]
    NoPlayers,
    /// Move offset is zero or negative.
    #[error("move offset must be positive")]
    InvalidOffset,
}

/// Errors that can occur when rolling the die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    /// Roll value is negative.
    #[error("invalid roll")]
    NegativeRoll,
    /// Fewer than two players have joined.
    #[error("cannot roll if game not playable")]
    NotPlayable,
    /// The registry refused the move.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors that can occur when reporting an answer outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// The registry has no current player.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors that can occur while the bundled runner drives a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    /// A roll was rejected.
    #[error("roll failed: {0}")]
    Roll(#[from] RollError),
    /// An answer outcome was rejected.
    #[error("answer failed: {0}")]
    Answer(#[from] AnswerError),
    /// The registry has no current player.
    #[error("registry failed: {0}")]
    Registry(#[from] RegistryError),
    /// Nobody won within the allotted number of turns.
    #[error("turn limit reached without a winner")]
    TurnLimit,
}
