//! Read-only state surface handed to renderers.

use super::error::SnapshotError;
use crate::core::{CommandRecord, PromptContext, State, TerminalState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// State and context of a machine after a transition.
///
/// Renderers read it; they never write back except by sending events.
/// Snapshots encode to JSON or to compact binary for renderers living in
/// another process.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,
    /// Machine instance the snapshot was taken from
    pub session: Uuid,
    pub taken_at: DateTime<Utc>,
    pub state: TerminalState,
    pub current_command: String,
    pub executed_commands: Vec<CommandRecord>,
}

impl Snapshot {
    pub fn new(session: Uuid, state: TerminalState, context: PromptContext) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            session,
            taken_at: Utc::now(),
            state,
            current_command: context.current_command,
            executed_commands: context.executed_commands,
        }
    }

    /// Dotted state path, e.g. `ready.focused`.
    pub fn path(&self) -> &str {
        self.state.path()
    }

    pub fn matches(&self, path: &str) -> bool {
        self.state.matches(path)
    }

    /// Whether a text cursor should be drawn.
    pub fn shows_cursor(&self) -> bool {
        self.state.is_focused()
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}
