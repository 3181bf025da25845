//! Focus-tracking activity.
//!
//! Listens to pointer-down and touch-start signals and turns each into a
//! `FOCUS` or `NOT_FOCUSED` event depending on whether the signal's target
//! lies inside the widget's root element. The root is looked up again for
//! every signal, so a widget that mounts late or moves is hit-tested as it
//! is now.

use super::pointer::{PointerHub, PointerKind};
use super::Teardown;
use crate::event::Event;
use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::mpsc::Sender;

/// Containment test for the widget's root element.
pub trait Bounds<T> {
    fn contains(&self, target: &T) -> bool;
}

impl<T, F> Bounds<T> for F
where
    F: Fn(&T) -> bool,
{
    fn contains(&self, target: &T) -> bool {
        self(target)
    }
}

/// Decide which event a pointer signal raises.
///
/// With no root element attached yet, every signal counts as inside.
///
/// ```rust
/// use termprompt::activity::focus_event;
/// use termprompt::event::Event;
///
/// let root = |x: &i32| (0..10).contains(x);
/// assert_eq!(focus_event(Some(&root), &3), Event::Focus);
/// assert_eq!(focus_event(Some(&root), &42), Event::NotFocused);
/// assert_eq!(focus_event::<i32, fn(&i32) -> bool>(None, &42), Event::Focus);
/// ```
pub fn focus_event<T, B: Bounds<T>>(root: Option<&B>, target: &T) -> Event {
    match root {
        Some(root) if !root.contains(target) => Event::NotFocused,
        _ => Event::Focus,
    }
}

/// Shared slot holding the widget's current root element.
///
/// Clones share the same slot: the host side writes it, the tracker reads
/// it on every signal.
pub struct RootHandle<B>(Rc<RefCell<Option<B>>>);

impl<B> RootHandle<B> {
    pub fn new(root: Option<B>) -> Self {
        Self(Rc::new(RefCell::new(root)))
    }

    /// Replace the root element. `None` while the widget is not mounted.
    pub fn set(&self, root: Option<B>) {
        *self.0.borrow_mut() = root;
    }

    pub fn is_attached(&self) -> bool {
        self.0.borrow().is_some()
    }

    /// Run `f` against the current root.
    pub fn with<R>(&self, f: impl FnOnce(Option<&B>) -> R) -> R {
        f(self.0.borrow().as_ref())
    }
}

impl<B> Clone for RootHandle<B> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<B> Default for RootHandle<B> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<B> fmt::Debug for RootHandle<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Subscription logic of the focus-tracking activity.
pub struct FocusTracker<T, B> {
    root: RootHandle<B>,
    events: Sender<Event>,
    _target: PhantomData<fn(&T)>,
}

impl<T: 'static, B: Bounds<T> + 'static> FocusTracker<T, B> {
    pub fn new(root: RootHandle<B>, events: Sender<Event>) -> Self {
        Self {
            root,
            events,
            _target: PhantomData,
        }
    }

    /// Raise the focus event for one pointer signal, testing the target
    /// against whatever root is attached right now.
    pub fn handle(&self, target: &T) {
        let event = self.root.with(|root| focus_event(root, target));
        if self.events.send(event).is_err() {
            tracing::trace!("Event queue closed; focus signal dropped");
        }
    }

    /// Subscribe to both pointer signals. The returned teardown removes
    /// both listeners.
    pub fn start(self, hub: &PointerHub<T>) -> Teardown {
        let tracker = Rc::new(self);
        let ids: Vec<_> = PointerKind::ALL
            .into_iter()
            .map(|kind| {
                let tracker = Rc::clone(&tracker);
                hub.subscribe(kind, Rc::new(move |target: &T| tracker.handle(target)))
            })
            .collect();

        let hub = hub.clone();
        Teardown::new(move || {
            for id in ids {
                hub.unsubscribe(id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[derive(Clone)]
    struct Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    }

    impl Bounds<(i32, i32)> for Rect {
        fn contains(&self, &(px, py): &(i32, i32)) -> bool {
            px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
        }
    }

    fn widget() -> Rect {
        Rect {
            x: 0,
            y: 0,
            w: 700,
            h: 400,
        }
    }

    #[test]
    fn inside_target_raises_focus() {
        let (tx, rx) = mpsc::channel();
        let tracker = FocusTracker::new(RootHandle::new(Some(widget())), tx);

        tracker.handle(&(10, 10));
        assert_eq!(rx.try_recv(), Ok(Event::Focus));
    }

    #[test]
    fn outside_target_raises_not_focused() {
        let (tx, rx) = mpsc::channel();
        let tracker = FocusTracker::new(RootHandle::new(Some(widget())), tx);

        tracker.handle(&(800, 10));
        assert_eq!(rx.try_recv(), Ok(Event::NotFocused));
    }

    #[test]
    fn subscription_follows_both_signals() {
        let (tx, rx) = mpsc::channel();
        let hub = PointerHub::new();
        let teardown = FocusTracker::new(RootHandle::new(Some(widget())), tx).start(&hub);
        assert_eq!(hub.listener_count(), 2);

        hub.emit(PointerKind::MouseDown, &(1, 1));
        hub.emit(PointerKind::TouchStart, &(-5, 1));
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![Event::Focus, Event::NotFocused]);

        teardown.run();
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(hub.emit(PointerKind::MouseDown, &(1, 1)), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn root_is_read_on_every_signal() {
        let (tx, rx) = mpsc::channel();
        let root = RootHandle::default();
        let tracker = FocusTracker::new(root.clone(), tx);

        tracker.handle(&(800, 10));
        assert_eq!(rx.try_recv(), Ok(Event::Focus));

        root.set(Some(widget()));
        tracker.handle(&(800, 10));
        assert_eq!(rx.try_recv(), Ok(Event::NotFocused));

        root.set(Some(Rect {
            x: 600,
            ..widget()
        }));
        tracker.handle(&(800, 10));
        tracker.handle(&(10, 10));
        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![Event::Focus, Event::NotFocused]
        );
    }

    #[test]
    fn closed_queue_is_tolerated() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let tracker = FocusTracker::new(RootHandle::new(Some(widget())), tx);
        tracker.handle(&(1, 1));
    }
}
