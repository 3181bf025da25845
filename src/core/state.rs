//! Hierarchical terminal states.
//!
//! The outer state is either `booting` or `ready`; `ready` carries a nested
//! focus sub-state. Nesting is plain data, so transitions stay simple
//! pattern matches.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for states that can be recorded in a [`StateHistory`](super::StateHistory).
///
/// All methods are pure - no side effects. States are immutable values
/// describing the current position in a state machine.
///
/// # Example
///
/// ```rust
/// use termprompt::core::{Focus, State, TerminalState};
///
/// let state = TerminalState::Ready(Focus::Focused);
/// assert_eq!(state.name(), "focused");
/// assert_eq!(state.path(), "ready.focused");
/// assert!(state.matches("ready"));
/// assert!(state.matches("ready.focused"));
/// assert!(!state.matches("ready.notFocused"));
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the innermost state node.
    fn name(&self) -> &str;

    /// Dotted path from the root state node to the innermost one,
    /// for example `ready.focused`.
    fn path(&self) -> &str;

    /// Check whether this state is, or is nested inside, the state at `path`.
    ///
    /// `ready` matches both `ready.focused` and `ready.notFocused`;
    /// partial segment names (`rea`) never match.
    fn matches(&self, path: &str) -> bool {
        let own = self.path();
        own == path
            || (own.len() > path.len()
                && own.starts_with(path)
                && own.as_bytes()[path.len()] == b'.')
    }
}

/// Focus sub-state of [`TerminalState::Ready`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Focus {
    /// The text-capture surface owns input; a cursor is drawn.
    Focused,
    /// Initial sub-state of `ready`.
    #[default]
    NotFocused,
}

/// Top-level state of the prompt machine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TerminalState {
    /// Waiting for the host to attach its surfaces and send `BOOTED`.
    #[default]
    Booting,
    /// Interactive; focus tracking is running.
    Ready(Focus),
}

impl TerminalState {
    /// State entered on `BOOTED`.
    pub const READY: TerminalState = TerminalState::Ready(Focus::NotFocused);

    /// Focus sub-state, if the machine is `ready`.
    pub fn focus(&self) -> Option<Focus> {
        match self {
            Self::Booting => None,
            Self::Ready(focus) => Some(*focus),
        }
    }

    /// True only in `ready.focused`.
    pub fn is_focused(&self) -> bool {
        matches!(self, Self::Ready(Focus::Focused))
    }
}

impl State for TerminalState {
    fn name(&self) -> &str {
        match self {
            Self::Booting => "booting",
            Self::Ready(Focus::Focused) => "focused",
            Self::Ready(Focus::NotFocused) => "notFocused",
        }
    }

    fn path(&self) -> &str {
        match self {
            Self::Booting => "booting",
            Self::Ready(Focus::Focused) => "ready.focused",
            Self::Ready(Focus::NotFocused) => "ready.notFocused",
        }
    }
}

impl fmt::Display for TerminalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_booting() {
        assert_eq!(TerminalState::default(), TerminalState::Booting);
        assert_eq!(TerminalState::READY, TerminalState::Ready(Focus::NotFocused));
    }

    #[test]
    fn path_returns_dotted_hierarchy() {
        assert_eq!(TerminalState::Booting.path(), "booting");
        assert_eq!(TerminalState::Ready(Focus::Focused).path(), "ready.focused");
        assert_eq!(
            TerminalState::Ready(Focus::NotFocused).path(),
            "ready.notFocused"
        );
    }

    #[test]
    fn name_returns_innermost_node() {
        assert_eq!(TerminalState::Booting.name(), "booting");
        assert_eq!(TerminalState::Ready(Focus::Focused).name(), "focused");
        assert_eq!(TerminalState::Ready(Focus::NotFocused).name(), "notFocused");
    }

    #[test]
    fn matches_parent_and_exact_paths() {
        let focused = TerminalState::Ready(Focus::Focused);
        assert!(focused.matches("ready"));
        assert!(focused.matches("ready.focused"));
        assert!(!focused.matches("ready.notFocused"));
        assert!(!focused.matches("booting"));
        assert!(!focused.matches("rea"));
        assert!(!focused.matches("ready.focusedX"));

        assert!(TerminalState::Booting.matches("booting"));
        assert!(!TerminalState::Booting.matches("ready"));
    }

    #[test]
    fn focus_accessors() {
        assert_eq!(TerminalState::Booting.focus(), None);
        assert_eq!(TerminalState::READY.focus(), Some(Focus::NotFocused));
        assert!(TerminalState::Ready(Focus::Focused).is_focused());
        assert!(!TerminalState::READY.is_focused());
        assert!(!TerminalState::Booting.is_focused());
    }

    #[test]
    fn display_uses_path() {
        assert_eq!(
            TerminalState::Ready(Focus::Focused).to_string(),
            "ready.focused"
        );
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TerminalState::Ready(Focus::NotFocused);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"ready":"notFocused"}"#);
        let deserialized: TerminalState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);

        let json = serde_json::to_string(&TerminalState::Booting).unwrap();
        assert_eq!(json, r#""booting""#);
    }
}
