//! Turn order bookkeeping.
//!
//! [`PlayerRegistry`] owns the seating order and the cursor naming whose turn
//! it is. It knows nothing about scoring or the penalty box.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::RegistryError;
use crate::player::Player;

/// Ordered, append-only list of players plus the current-turn cursor.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    /// `None` until the first player joins.
    current: Option<usize>,
}

impl PlayerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            players: Vec::new(),
            current: None,
        }
    }

    /// Appends a player and returns the assigned ordinal.
    ///
    /// Names are not validated; empty and duplicate names are accepted. The
    /// first player added becomes the current player.
    ///
    /// # Example
    ///
    /// ```
    /// use trivia::PlayerRegistry;
    ///
    /// let mut registry = PlayerRegistry::new();
    /// assert_eq!(registry.add("Alice"), 0);
    /// assert_eq!(registry.add("Bob"), 1);
    /// assert_eq!(registry.current().unwrap().name(), "Alice");
    /// ```
    pub fn add(&mut self, name: impl Into<String>) -> usize {
        let ordinal = self.players.len();
        self.players.push(Player::new(name, ordinal));
        if self.current.is_none() {
            self.current = Some(0);
        }
        ordinal
    }

    /// Returns the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NoPlayers`] if no player has been added.
    pub fn current(&self) -> Result<&Player, RegistryError> {
        self.current
            .and_then(|index| self.players.get(index))
            .ok_or(RegistryError::NoPlayers)
    }

    /// Returns the number of players added so far.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.players.len()
    }

    /// Returns all players in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Moves the current player forward by `offset` squares and returns the
    /// new location.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidOffset`] if `offset` is not positive,
    /// or [`RegistryError::NoPlayers`] if no player has been added.
    pub fn move_current(&mut self, offset: i32) -> Result<usize, RegistryError> {
        let steps = usize::try_from(offset)
            .ok()
            .filter(|&steps| steps > 0)
            .ok_or(RegistryError::InvalidOffset)?;
        let player = self
            .current
            .and_then(|index| self.players.get_mut(index))
            .ok_or(RegistryError::NoPlayers)?;

        Ok(player.advance(steps))
    }

    /// Passes the turn to the next player, wrapping to the first player after
    /// the last one.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NoPlayers`] if no player has been added.
    pub fn give_turn_to_next_player(&mut self) -> Result<(), RegistryError> {
        let index = self.current.ok_or(RegistryError::NoPlayers)?;
        self.current = Some((index + 1) % self.players.len());
        Ok(())
    }
}
