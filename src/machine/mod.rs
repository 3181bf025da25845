//! The prompt state machine.
//!
//! This module is the transition logic over the pure core:
//!
//! - **Transition**: a total function `(state, context, event) -> Step`
//! - **Effects**: directives the host executes; the machine never touches
//!   the environment itself
//! - **Machine**: holds the current state, context and history, and applies
//!   one event at a time
//!
//! Activities (long-lived subscriptions bound to a state) appear here only
//! as [`Effect::StartActivity`] / [`Effect::StopActivity`] descriptors.

mod runtime;
mod transition;

pub use runtime::{MachineEnv, Outcome, PromptMachine};
pub use transition::{commit, has_pressed_enter, transition, Commit, Step};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Long-lived subscription owned by a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Activity {
    /// Pointer/touch listener deciding focus; runs for the whole of `ready`.
    FocusTracking,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::FocusTracking => f.write_str("focusTracking"),
        }
    }
}

/// Fire-and-forget directive for the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Effect {
    /// Move input focus to the text-capture surface.
    SetInputFocused,
    /// Blank the text-capture surface.
    ClearCommandInput,
    StartActivity(Activity),
    StopActivity(Activity),
}
