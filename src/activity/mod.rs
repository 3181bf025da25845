//! Host-side activities.
//!
//! An activity is a setup function returning a [`Teardown`]. The host runs
//! setup when the machine emits [`Effect::StartActivity`](crate::machine::Effect)
//! and the teardown on the matching stop. [`ActivityRunner`] guarantees at
//! most one live instance per activity: starting an already-running activity
//! tears the old one down first, and dropping the runner tears down
//! everything.

mod focus;
mod pointer;

pub use focus::{focus_event, Bounds, FocusTracker, RootHandle};
pub use pointer::{ListenerId, PointerHub, PointerKind};

use crate::machine::Activity;
use std::collections::HashMap;
use std::fmt;

/// Cleanup returned by an activity's setup.
pub struct Teardown(Option<Box<dyn FnOnce()>>);

impl Teardown {
    pub fn new<F>(teardown: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self(Some(Box::new(teardown)))
    }

    /// Teardown with nothing to release.
    pub fn noop() -> Self {
        Self(None)
    }

    /// Run the cleanup. Runs at most once.
    pub fn run(mut self) {
        if let Some(teardown) = self.0.take() {
            teardown();
        }
    }
}

impl fmt::Debug for Teardown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Teardown")
            .field(&if self.0.is_some() { "pending" } else { "empty" })
            .finish()
    }
}

/// Live activities keyed by kind.
#[derive(Debug, Default)]
pub struct ActivityRunner {
    running: HashMap<Activity, Teardown>,
}

impl ActivityRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `activity`, stopping any running instance first.
    pub fn start<F>(&mut self, activity: Activity, setup: F)
    where
        F: FnOnce() -> Teardown,
    {
        if self.stop(activity) {
            tracing::warn!(%activity, "Activity restarted while running");
        }
        let teardown = setup();
        self.running.insert(activity, teardown);
        tracing::debug!(%activity, "Activity started");
    }

    /// Stop `activity`. Returns whether it was running.
    pub fn stop(&mut self, activity: Activity) -> bool {
        match self.running.remove(&activity) {
            Some(teardown) => {
                teardown.run();
                tracing::debug!(%activity, "Activity stopped");
                true
            }
            None => false,
        }
    }

    pub fn stop_all(&mut self) {
        let activities: Vec<Activity> = self.running.keys().copied().collect();
        for activity in activities {
            self.stop(activity);
        }
    }

    pub fn is_running(&self, activity: Activity) -> bool {
        self.running.contains_key(&activity)
    }
}

impl Drop for ActivityRunner {
    fn drop(&mut self) {
        self.stop_all();
    }
}
