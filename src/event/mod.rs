//! Inbound machine events.
//!
//! The event set is closed: each tag carries exactly one payload shape.
//! Hosts that receive loosely-typed input (JSON from a web view, messages
//! from another process) go through [`RawEvent`] first, which rejects
//! malformed payloads before anything reaches the machine.

mod error;
mod raw;

pub use error::{EventError, RejectedEvent};
pub use raw::RawEvent;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key identifier carried by `KEY_DOWN`.
///
/// Only `Enter` has behavior in the machine; everything else is kept
/// verbatim so hosts can log it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    Enter,
    Other(String),
}

impl Key {
    pub fn as_str(&self) -> &str {
        match self {
            Key::Enter => "Enter",
            Key::Other(key) => key,
        }
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        if key == "Enter" {
            Key::Enter
        } else {
            Key::Other(key)
        }
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Key::from(key.to_string())
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        match key {
            Key::Enter => "Enter".to_string(),
            Key::Other(key) => key,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag of an [`Event`], without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Booted,
    Focus,
    NotFocused,
    UpdateCurrentCommand,
    KeyDown,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Booted,
        EventKind::Focus,
        EventKind::NotFocused,
        EventKind::UpdateCurrentCommand,
        EventKind::KeyDown,
    ];

    /// Wire name, e.g. `UPDATE_CURRENT_COMMAND`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Booted => "BOOTED",
            EventKind::Focus => "FOCUS",
            EventKind::NotFocused => "NOT_FOCUSED",
            EventKind::UpdateCurrentCommand => "UPDATE_CURRENT_COMMAND",
            EventKind::KeyDown => "KEY_DOWN",
        }
    }

    pub fn parse(name: &str) -> Option<EventKind> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event delivered to the prompt machine.
///
/// Serializes with a `type` tag matching the wire names:
///
/// ```rust
/// use termprompt::event::{Event, Key};
///
/// let event: Event = serde_json::from_str(r#"{"type":"KEY_DOWN","key":"Enter"}"#).unwrap();
/// assert_eq!(event, Event::KeyDown { key: Key::Enter });
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    /// Host surfaces are attached; leave `booting`.
    Booted,
    /// A pointer went down inside the widget.
    Focus,
    /// A pointer went down outside the widget.
    NotFocused,
    /// Full new value of the input buffer, not a delta.
    UpdateCurrentCommand { text: String },
    /// A key went down in the input; only `Enter` passes the submit guard.
    KeyDown { key: Key },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Booted => EventKind::Booted,
            Event::Focus => EventKind::Focus,
            Event::NotFocused => EventKind::NotFocused,
            Event::UpdateCurrentCommand { .. } => EventKind::UpdateCurrentCommand,
            Event::KeyDown { .. } => EventKind::KeyDown,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn update(text: impl Into<String>) -> Self {
        Event::UpdateCurrentCommand { text: text.into() }
    }

    pub fn key_down(key: impl Into<Key>) -> Self {
        Event::KeyDown { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_parses_enter() {
        assert_eq!(Key::from("Enter"), Key::Enter);
        assert_eq!(Key::from("a"), Key::Other("a".into()));
        assert_eq!(Key::from("enter"), Key::Other("enter".into()));
        assert_eq!(String::from(Key::Enter), "Enter");
    }

    #[test]
    fn event_kind_round_trips_wire_names() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(EventKind::parse("booted"), None);
    }

    #[test]
    fn event_names_match_kinds() {
        assert_eq!(Event::Booted.name(), "BOOTED");
        assert_eq!(Event::update("ls").name(), "UPDATE_CURRENT_COMMAND");
        assert_eq!(Event::key_down("Enter").kind(), EventKind::KeyDown);
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let json = serde_json::to_string(&Event::update("ls -la")).unwrap();
        assert_eq!(json, r#"{"type":"UPDATE_CURRENT_COMMAND","text":"ls -la"}"#);

        let json = serde_json::to_string(&Event::NotFocused).unwrap();
        assert_eq!(json, r#"{"type":"NOT_FOCUSED"}"#);

        let event: Event = serde_json::from_str(r#"{"type":"KEY_DOWN","key":"Tab"}"#).unwrap();
        assert_eq!(event, Event::key_down("Tab"));
    }
}
