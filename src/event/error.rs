//! Boundary errors for raw host events.

use thiserror::Error;

/// A single problem found in a raw event.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("Unknown event type '{kind}'")]
    UnknownType { kind: String },

    #[error("{event} requires a '{field}' payload")]
    MissingPayload {
        event: &'static str,
        field: &'static str,
    },

    #[error("{event} does not take a '{field}' payload")]
    UnexpectedPayload {
        event: &'static str,
        field: &'static str,
    },
}

/// A raw event rejected at the boundary, with every problem found.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Rejected '{kind}' event: {}", join(.errors))]
pub struct RejectedEvent {
    pub kind: String,
    pub errors: Vec<EventError>,
}

fn join(errors: &[EventError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
