//! Guard predicates for controlling transitions.
//!
//! Guards are pure boolean functions over the machine context and the
//! incoming event. They decide whether a transition's actions fire.

use std::fmt;

/// Pure predicate that determines if a guarded transition can execute.
///
/// # Example
///
/// ```rust
/// use termprompt::core::{Guard, PromptContext};
/// use termprompt::event::{Event, Key};
///
/// let has_pressed_enter = Guard::new(|_: &PromptContext, event: &Event| {
///     matches!(event, Event::KeyDown { key: Key::Enter })
/// });
///
/// let context = PromptContext::new();
/// assert!(has_pressed_enter.check(&context, &Event::KeyDown { key: Key::Enter }));
/// assert!(!has_pressed_enter.check(&context, &Event::KeyDown { key: Key::from("a") }));
/// ```
pub struct Guard<C, E> {
    predicate: Box<dyn Fn(&C, &E) -> bool + Send + Sync>,
}

impl<C, E> Guard<C, E> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and side-effect free.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C, &E) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate.
    pub fn check(&self, context: &C, event: &E) -> bool {
        (self.predicate)(context, event)
    }
}

impl<C, E> fmt::Debug for Guard<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
