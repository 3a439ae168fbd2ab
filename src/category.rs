//! Board squares and their question categories.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt;

/// Number of squares on the standard board.
pub const BOARD_SIZE: usize = 12;

/// Maps a board location to a category label.
///
/// Implementations must be total: every location the engine can produce
/// (any `usize`) needs a category.
pub trait CategoryResolver {
    /// Returns the category for the given raw board location.
    fn resolve_category(&self, location: usize) -> String;
}

impl<T: CategoryResolver + ?Sized> CategoryResolver for &T {
    fn resolve_category(&self, location: usize) -> String {
        (**self).resolve_category(location)
    }
}

impl<T: CategoryResolver + ?Sized> CategoryResolver for &mut T {
    fn resolve_category(&self, location: usize) -> String {
        (**self).resolve_category(location)
    }
}

impl<T: CategoryResolver + ?Sized> CategoryResolver for Box<T> {
    fn resolve_category(&self, location: usize) -> String {
        (**self).resolve_category(location)
    }
}

/// Question category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Pop culture.
    Pop,
    /// Science.
    Science,
    /// Sports.
    Sports,
    /// Rock music.
    Rock,
}

impl Category {
    /// All categories in board order.
    pub const ALL: [Self; 4] = [Self::Pop, Self::Science, Self::Sports, Self::Rock];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pop => "Pop",
            Self::Science => "Science",
            Self::Sports => "Sports",
            Self::Rock => "Rock",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The standard 12-square board.
///
/// Squares cycle Pop, Science, Sports, Rock; locations past the last square
/// wrap around.
///
/// # Example
///
/// ```
/// use trivia::{Category, CategoryResolver, StandardBoard};
///
/// let board = StandardBoard;
/// assert_eq!(board.category_at(0), Category::Pop);
/// assert_eq!(board.category_at(13), Category::Science);
/// assert_eq!(board.resolve_category(3), "Rock");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardBoard;

impl StandardBoard {
    /// Returns the category of the square a raw location lands on.
    #[must_use]
    pub const fn category_at(&self, location: usize) -> Category {
        match location % BOARD_SIZE {
            0 | 4 | 8 => Category::Pop,
            1 | 5 | 9 => Category::Science,
            2 | 6 | 10 => Category::Sports,
            _ => Category::Rock,
        }
    }
}

impl CategoryResolver for StandardBoard {
    fn resolve_category(&self, location: usize) -> String {
        self.category_at(location).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_cycle_through_categories() {
        let board = StandardBoard;
        for square in 0..BOARD_SIZE {
            assert_eq!(board.category_at(square), Category::ALL[square % 4]);
        }
    }

    #[test]
    fn locations_wrap_onto_the_board() {
        let board = StandardBoard;
        assert_eq!(board.category_at(BOARD_SIZE), Category::Pop);
        assert_eq!(board.category_at(BOARD_SIZE + 2), Category::Sports);
        assert_eq!(board.category_at(usize::MAX), board.category_at(usize::MAX % BOARD_SIZE));
    }

    #[test]
    fn boxed_resolver_delegates() {
        let resolver: Box<dyn CategoryResolver> = Box::new(StandardBoard);
        assert_eq!(resolver.resolve_category(7), "Rock");
    }
}
