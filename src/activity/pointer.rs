//! Pointer and touch-start listener registry.
//!
//! Stands in for a document-level event target. Listeners are shared
//! handles so that emitting never holds the registry borrowed while a
//! listener runs.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Which host signal fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    MouseDown,
    TouchStart,
}

impl PointerKind {
    pub const ALL: [PointerKind; 2] = [PointerKind::MouseDown, PointerKind::TouchStart];
}

/// Handle returned by [`PointerHub::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: u64,
    entries: Vec<(ListenerId, PointerKind, Listener<T>)>,
}

/// Shared registry of pointer listeners. Clones refer to the same registry.
pub struct PointerHub<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T> PointerHub<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    pub fn subscribe(&self, kind: PointerKind, listener: Listener<T>) -> ListenerId {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.entries.push((id, kind, listener));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.entries.len();
        registry.entries.retain(|(entry, _, _)| *entry != id);
        registry.entries.len() != before
    }

    /// Deliver a signal to every listener of `kind`, in subscription order.
    /// Returns the number of listeners called.
    pub fn emit(&self, kind: PointerKind, target: &T) -> usize {
        let listeners: Vec<Listener<T>> = self
            .registry
            .borrow()
            .entries
            .iter()
            .filter(|(_, entry_kind, _)| *entry_kind == kind)
            .map(|(_, _, listener)| Rc::clone(listener))
            .collect();

        for listener in &listeners {
            listener(target);
        }
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }
}

impl<T> Clone for PointerHub<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<T> Default for PointerHub<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PointerHub<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
