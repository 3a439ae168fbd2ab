//! Narration events emitted while a game is played.

use core::fmt;

/// A turn or result notification handed to the [`Presenter`](crate::Presenter).
///
/// The [`Display`](fmt::Display) form is the classic console wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narration<'a> {
    /// A player joined the game.
    PlayerAdded {
        /// Player name.
        name: &'a str,
        /// One-based seat number.
        number: usize,
    },
    /// A new turn starts.
    CurrentPlayer {
        /// Player name.
        name: &'a str,
    },
    /// The die was rolled.
    Rolled {
        /// Die value.
        value: i32,
    },
    /// A boxed player rolled odd and plays this turn.
    LeavingPenaltyBox {
        /// Player name.
        name: &'a str,
    },
    /// A boxed player rolled even and stays put.
    StayingInPenaltyBox {
        /// Player name.
        name: &'a str,
    },
    /// A player moved.
    Moved {
        /// Player name.
        name: &'a str,
        /// Raw board location after the move.
        location: usize,
    },
    /// The pending question was answered correctly.
    CorrectAnswer,
    /// A purse was credited.
    PurseUpdated {
        /// Player name.
        name: &'a str,
        /// Coins after the credit.
        coins: u32,
    },
    /// The pending question was answered incorrectly.
    IncorrectAnswer,
    /// A player was sent to the penalty box.
    SentToPenaltyBox {
        /// Player name.
        name: &'a str,
    },
}

impl fmt::Display for Narration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::PlayerAdded { name, number } => {
                write!(f, "{name} was added\nThey are player number {number}")
            }
            Self::CurrentPlayer { name } => write!(f, "{name} is the current player"),
            Self::Rolled { value } => write!(f, "They have rolled a {value}"),
            Self::LeavingPenaltyBox { name } => {
                write!(f, "{name} is getting out of the penalty box")
            }
            Self::StayingInPenaltyBox { name } => {
                write!(f, "{name} is not getting out of the penalty box")
            }
            Self::Moved { name, location } => write!(f, "{name}'s new location is {location}"),
            Self::CorrectAnswer => f.write_str("Answer was correct!!!!"),
            Self::PurseUpdated { name, coins } => write!(f, "{name} now has {coins} Gold Coins."),
            Self::IncorrectAnswer => f.write_str("Question was incorrectly answered"),
            Self::SentToPenaltyBox { name } => write!(f, "{name} was sent to the penalty box"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn console_wording() {
        assert_eq!(
            Narration::PurseUpdated { name: "Alice", coins: 3 }.to_string(),
            "Alice now has 3 Gold Coins."
        );
        assert_eq!(
            Narration::Moved { name: "Bob", location: 14 }.to_string(),
            "Bob's new location is 14"
        );
        assert_eq!(
            Narration::PlayerAdded { name: "Chet", number: 1 }.to_string(),
            "Chet was added\nThey are player number 1"
        );
    }
}
