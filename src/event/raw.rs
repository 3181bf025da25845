//! Loosely-typed host events and their validation.
//!
//! Validation accumulates every problem in a raw event instead of stopping
//! at the first one, so a host sees the complete list of what it got wrong.

use super::error::{EventError, RejectedEvent};
use super::{Event, EventKind, Key};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<EventError>>;

/// Event as a host hands it over, before validation.
///
/// # Example
///
/// ```rust
/// use termprompt::event::{Event, RawEvent};
///
/// let raw: RawEvent = serde_json::from_str(r#"{"type":"UPDATE_CURRENT_COMMAND","text":"ls"}"#).unwrap();
/// assert_eq!(raw.decode().unwrap(), Event::update("ls"));
///
/// let raw: RawEvent = serde_json::from_str(r#"{"type":"UPDATE_CURRENT_COMMAND","key":"a"}"#).unwrap();
/// let rejected = raw.decode().unwrap_err();
/// assert_eq!(rejected.errors.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl RawEvent {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Validate the payload against the event's declared shape.
    /// Returns every violation found.
    pub fn validate(&self) -> Validation<Event, NonEmptyVec<EventError>> {
        let Some(kind) = EventKind::parse(&self.kind) else {
            return Validation::fail(EventError::UnknownType {
                kind: self.kind.clone(),
            });
        };

        let name = kind.as_str();
        let checks = match kind {
            EventKind::Booted | EventKind::Focus | EventKind::NotFocused => vec![
                forbid(name, "text", &self.text),
                forbid(name, "key", &self.key),
            ],
            EventKind::UpdateCurrentCommand => vec![
                require(name, "text", &self.text),
                forbid(name, "key", &self.key),
            ],
            EventKind::KeyDown => vec![
                require(name, "key", &self.key),
                forbid(name, "text", &self.text),
            ],
        };

        Validation::all_vec(checks).map(|_| self.assemble(kind))
    }

    /// Validate and convert into a machine event.
    pub fn decode(&self) -> Result<Event, RejectedEvent> {
        match self.validate() {
            Validation::Success(event) => Ok(event),
            Validation::Failure(errors) => Err(RejectedEvent {
                kind: self.kind.clone(),
                errors: errors.iter().cloned().collect(),
            }),
        }
    }

    // Payload presence has already been checked by `validate`.
    fn assemble(&self, kind: EventKind) -> Event {
        match kind {
            EventKind::Booted => Event::Booted,
            EventKind::Focus => Event::Focus,
            EventKind::NotFocused => Event::NotFocused,
            EventKind::UpdateCurrentCommand => Event::UpdateCurrentCommand {
                text: self.text.clone().unwrap_or_default(),
            },
            EventKind::KeyDown => Event::KeyDown {
                key: Key::from(self.key.clone().unwrap_or_default()),
            },
        }
    }
}

impl From<&Event> for RawEvent {
    fn from(event: &Event) -> Self {
        let raw = RawEvent::new(event.name());
        match event {
            Event::UpdateCurrentCommand { text } => raw.with_text(text.clone()),
            Event::KeyDown { key } => raw.with_key(key.as_str()),
            _ => raw,
        }
    }
}

fn require(event: &'static str, field: &'static str, value: &Option<String>) -> Check {
    if value.is_some() {
        Validation::success(())
    } else {
        Validation::fail(EventError::MissingPayload { event, field })
    }
}

fn forbid(event: &'static str, field: &'static str, value: &Option<String>) -> Check {
    if value.is_none() {
        Validation::success(())
    } else {
        Validation::fail(EventError::UnexpectedPayload { event, field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_payloadless_events() {
        assert_eq!(RawEvent::new("BOOTED").decode(), Ok(Event::Booted));
        assert_eq!(RawEvent::new("FOCUS").decode(), Ok(Event::Focus));
        assert_eq!(RawEvent::new("NOT_FOCUSED").decode(), Ok(Event::NotFocused));
    }

    #[test]
    fn decodes_payload_events() {
        let raw = RawEvent::new("UPDATE_CURRENT_COMMAND").with_text("pwd");
        assert_eq!(raw.decode(), Ok(Event::update("pwd")));

        let raw = RawEvent::new("KEY_DOWN").with_key("Enter");
        assert_eq!(raw.decode(), Ok(Event::KeyDown { key: Key::Enter }));
    }

    #[test]
    fn empty_text_is_a_valid_payload() {
        let raw = RawEvent::new("UPDATE_CURRENT_COMMAND").with_text("");
        assert_eq!(raw.decode(), Ok(Event::update("")));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let rejected = RawEvent::new("EXPLODE").decode().unwrap_err();
        assert_eq!(
            rejected.errors,
            vec![EventError::UnknownType {
                kind: "EXPLODE".into()
            }]
        );
    }

    #[test]
    fn missing_payload_is_rejected() {
        let rejected = RawEvent::new("UPDATE_CURRENT_COMMAND").decode().unwrap_err();
        assert_eq!(
            rejected.errors,
            vec![EventError::MissingPayload {
                event: "UPDATE_CURRENT_COMMAND",
                field: "text"
            }]
        );
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let raw = RawEvent::new("KEY_DOWN").with_text("ls");

        match raw.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, EventError::MissingPayload { field: "key", .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, EventError::UnexpectedPayload { field: "text", .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn rejected_event_lists_every_problem() {
        let raw = RawEvent::new("FOCUS").with_text("x").with_key("y");
        let message = raw.decode().unwrap_err().to_string();

        assert_eq!(
            message,
            "Rejected 'FOCUS' event: FOCUS does not take a 'text' payload; \
             FOCUS does not take a 'key' payload"
        );
    }

    #[test]
    fn converts_from_typed_event() {
        let event = Event::update("echo hi");
        assert_eq!(RawEvent::from(&event).decode(), Ok(event));

        let event = Event::key_down("ArrowUp");
        assert_eq!(RawEvent::from(&event).decode(), Ok(event));
    }
}
