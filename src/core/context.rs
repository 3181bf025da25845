//! Context carried alongside the prompt state.

use serde::{Deserialize, Serialize};

/// One submitted command and its canned output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Exact submitted text, never empty.
    pub command: String,
    /// Output lines; empty when the resolver had nothing for `command`.
    pub response: Vec<String>,
}

impl CommandRecord {
    pub fn new(command: impl Into<String>, response: Vec<String>) -> Self {
        Self {
            command: command.into(),
            response,
        }
    }
}

/// Mutable data carried by the prompt machine.
///
/// Created empty when the machine is built and changed only by the
/// keystroke-update and submit actions.
///
/// # Example
///
/// ```rust
/// use termprompt::core::PromptContext;
///
/// let context = PromptContext::new();
/// assert_eq!(context.current_command, "");
/// assert!(context.executed_commands.is_empty());
/// assert!(context.is_idle());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptContext {
    /// Text being composed. `""` means no input.
    pub current_command: String,
    /// Submitted commands in display order.
    pub executed_commands: Vec<CommandRecord>,
}

impl PromptContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while nothing is being composed.
    pub fn is_idle(&self) -> bool {
        self.current_command.is_empty()
    }

    /// Most recent record, if any.
    pub fn last_record(&self) -> Option<&CommandRecord> {
        self.executed_commands.last()
    }
}
