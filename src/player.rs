//! Player identity and board position.

use alloc::string::String;

/// A player seated at the table.
///
/// Two players are equal when their name and ordinal match; the board
/// location is not part of a player's identity.
#[derive(Debug, Clone, Eq)]
pub struct Player {
    name: String,
    ordinal: usize,
    location: usize,
}

impl Player {
    /// Creates a player at location 0.
    ///
    /// # Example
    ///
    /// ```
    /// use trivia::Player;
    ///
    /// let player = Player::new("Alice", 0);
    /// assert_eq!(player.name(), "Alice");
    /// assert_eq!(player.location(), 0);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, ordinal: usize) -> Self {
        Self {
            name: name.into(),
            ordinal,
            location: 0,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the zero-based join order index.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Returns the raw board position. It only ever grows; wrapping onto
    /// the board is left to the category resolver.
    #[must_use]
    pub const fn location(&self) -> usize {
        self.location
    }

    pub(crate) const fn advance(&mut self, steps: usize) -> usize {
        self.location += steps;
        self.location
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal == other.ordinal && self.name == other.name
    }
}
