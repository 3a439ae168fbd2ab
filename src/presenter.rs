//! Presentation sinks.

use alloc::boxed::Box;

use crate::event::Narration;

/// Receives questions and turn narration.
///
/// Delivery is best-effort; nothing is returned to the engine.
pub trait Presenter {
    /// Presents the question asked for the current turn.
    fn present(&mut self, category: &str, question: &str);

    /// Receives a turn or result notification. Ignored by default.
    fn narrate(&mut self, event: &Narration<'_>) {
        let _ = event;
    }
}

impl<T: Presenter + ?Sized> Presenter for &mut T {
    fn present(&mut self, category: &str, question: &str) {
        (**self).present(category, question);
    }

    fn narrate(&mut self, event: &Narration<'_>) {
        (**self).narrate(event);
    }
}

impl<T: Presenter + ?Sized> Presenter for Box<T> {
    fn present(&mut self, category: &str, question: &str) {
        (**self).present(category, question);
    }

    fn narrate(&mut self, event: &Narration<'_>) {
        (**self).narrate(event);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SilentPresenter;

impl Presenter for SilentPresenter {
    fn present(&mut self, _category: &str, _question: &str) {}
}

/// Prints questions and narration to standard output.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsolePresenter;

#[cfg(feature = "std")]
impl Presenter for ConsolePresenter {
    fn present(&mut self, category: &str, question: &str) {
        println!("The category is {category}");
        println!("{question}");
    }

    fn narrate(&mut self, event: &Narration<'_>) {
        println!("{event}");
    }
}
