//! Question deck configuration.

/// Default number of questions generated per category.
pub const DEFAULT_QUESTIONS_PER_CATEGORY: usize = 50;

/// Configuration options for a [`QuestionDeck`](crate::QuestionDeck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use trivia::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_questions_per_category(10)
///     .with_refill(false);
/// assert_eq!(options.questions_per_category, 10);
/// assert!(!options.refill);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of questions queued per category.
    pub questions_per_category: usize,
    /// Whether an exhausted category is dealt again from the start.
    /// When disabled, an exhausted category answers with a placeholder.
    pub refill: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            questions_per_category: DEFAULT_QUESTIONS_PER_CATEGORY,
            refill: true,
        }
    }
}

impl DeckOptions {
    /// Sets the number of questions per category.
    ///
    /// # Example
    ///
    /// ```
    /// use trivia::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_questions_per_category(3);
    /// assert_eq!(options.questions_per_category, 3);
    /// ```
    #[must_use]
    pub const fn with_questions_per_category(mut self, count: usize) -> Self {
        self.questions_per_category = count;
        self
    }

    /// Sets whether exhausted categories are dealt again.
    #[must_use]
    pub const fn with_refill(mut self, refill: bool) -> Self {
        self.refill = refill;
        self
    }
}
