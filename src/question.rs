//! Question supply.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::options::DeckOptions;

/// Supplies the next question for a category.
///
/// Implementations may be stateful but must be total: any category the
/// resolver can produce needs an answer.
pub trait QuestionSupplier {
    /// Returns the next question text for `category`.
    fn next_question(&mut self, category: &str) -> String;
}

impl<T: QuestionSupplier + ?Sized> QuestionSupplier for &mut T {
    fn next_question(&mut self, category: &str) -> String {
        (**self).next_question(category)
    }
}

impl<T: QuestionSupplier + ?Sized> QuestionSupplier for Box<T> {
    fn next_question(&mut self, category: &str) -> String {
        (**self).next_question(category)
    }
}

/// Numbered questions dealt from one queue per category.
///
/// Queues are created the first time a category is asked for, so any label
/// is accepted.
///
/// # Example
///
/// ```
/// use trivia::{DeckOptions, QuestionDeck, QuestionSupplier};
///
/// let mut deck = QuestionDeck::new(DeckOptions::default());
/// assert_eq!(deck.next_question("Pop"), "Pop Question 0");
/// assert_eq!(deck.next_question("Pop"), "Pop Question 1");
/// assert_eq!(deck.next_question("Rock"), "Rock Question 0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuestionDeck {
    options: DeckOptions,
    queues: HashMap<String, VecDeque<String>>,
}

impl QuestionDeck {
    /// Creates an empty deck.
    #[must_use]
    pub fn new(options: DeckOptions) -> Self {
        Self {
            options,
            queues: HashMap::new(),
        }
    }

    /// Returns the deck options.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Returns how many questions are left in a category's current queue.
    ///
    /// A category that has never been asked for reports a full queue.
    #[must_use]
    pub fn remaining(&self, category: &str) -> usize {
        self.queues
            .get(category)
            .map_or(self.options.questions_per_category, VecDeque::len)
    }

    fn fill(category: &str, count: usize) -> VecDeque<String> {
        (0..count)
            .map(|index| format!("{category} Question {index}"))
            .collect()
    }
}

impl QuestionSupplier for QuestionDeck {
    fn next_question(&mut self, category: &str) -> String {
        let count = self.options.questions_per_category;
        let queue = self
            .queues
            .entry(String::from(category))
            .or_insert_with(|| Self::fill(category, count));

        if queue.is_empty() && self.options.refill {
            log::debug!("refilling {category} questions");
            *queue = Self::fill(category, count);
        }

        queue
            .pop_front()
            .unwrap_or_else(|| format!("No more {category} questions"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_have_independent_queues() {
        let mut deck = QuestionDeck::new(DeckOptions::default().with_questions_per_category(3));
        assert_eq!(deck.next_question("Science"), "Science Question 0");
        assert_eq!(deck.next_question("Sports"), "Sports Question 0");
        assert_eq!(deck.next_question("Science"), "Science Question 1");
        assert_eq!(deck.remaining("Science"), 1);
        assert_eq!(deck.remaining("Sports"), 2);
        assert_eq!(deck.remaining("Rock"), 3);
    }

    #[test]
    fn exhausted_category_refills() {
        let mut deck = QuestionDeck::new(DeckOptions::default().with_questions_per_category(2));
        assert_eq!(deck.next_question("Pop"), "Pop Question 0");
        assert_eq!(deck.next_question("Pop"), "Pop Question 1");
        assert_eq!(deck.next_question("Pop"), "Pop Question 0");
    }

    #[test]
    fn exhausted_category_without_refill_uses_placeholder() {
        let options = DeckOptions::default()
            .with_questions_per_category(1)
            .with_refill(false);
        let mut deck = QuestionDeck::new(options);
        assert_eq!(deck.next_question("Rock"), "Rock Question 0");
        assert_eq!(deck.next_question("Rock"), "No more Rock questions");
        assert_eq!(deck.next_question("Rock"), "No more Rock questions");
    }

    #[test]
    fn empty_deck_is_still_total() {
        let mut deck = QuestionDeck::new(DeckOptions::default().with_questions_per_category(0));
        assert_eq!(deck.next_question("Pop"), "No more Pop questions");
    }
}
