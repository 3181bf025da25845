//! Plain-text rendering of a snapshot.

use super::snapshot::Snapshot;
use crate::config::TerminalConfig;

/// Renders snapshots as terminal lines: the login banner, every submitted
/// command with its output, and the live prompt.
///
/// # Example
///
/// ```rust
/// use termprompt::config::TerminalConfig;
/// use termprompt::core::{CommandRecord, Focus, PromptContext, TerminalState};
/// use termprompt::render::{Snapshot, TextRenderer};
/// use uuid::Uuid;
///
/// let snapshot = Snapshot::new(
///     Uuid::nil(),
///     TerminalState::Ready(Focus::Focused),
///     PromptContext {
///         current_command: "pw".into(),
///         executed_commands: vec![CommandRecord::new("ls", vec!["a.txt".into(), "b.txt".into()])],
///     },
/// );
///
/// let lines = TextRenderer::new(TerminalConfig::default()).render(&snapshot);
/// assert_eq!(lines, vec![
///     "Last login: Sun Mar 14 23:14:25 on ttys001",
///     "[root ~]$ ls",
///     "a.txt b.txt",
///     "[root ~]$ pw█",
/// ]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextRenderer {
    config: TerminalConfig,
}

impl TextRenderer {
    pub fn new(config: TerminalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn render(&self, snapshot: &Snapshot) -> Vec<String> {
        let mut lines = Vec::with_capacity(snapshot.executed_commands.len() * 2 + 2);
        lines.push(self.config.banner());

        for record in &snapshot.executed_commands {
            lines.push(self.prompt_line(&record.command));
            // Output is shown on one line, space separated.
            if !record.response.is_empty() {
                lines.push(record.response.join(" "));
            }
        }

        let mut live = self.prompt_line(&snapshot.current_command);
        if snapshot.shows_cursor() {
            live.push(self.config.cursor);
        }
        lines.push(live);

        lines
    }

    /// Render into a single newline-joined frame.
    pub fn frame(&self, snapshot: &Snapshot) -> String {
        self.render(snapshot).join("\n")
    }

    fn prompt_line(&self, command: &str) -> String {
        format!("{}{}", self.config.prompt, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CommandRecord, PromptContext, TerminalState};
    use uuid::Uuid;

    fn snapshot(state: TerminalState, current: &str, records: Vec<CommandRecord>) -> Snapshot {
        Snapshot::new(
            Uuid::nil(),
            state,
            PromptContext {
                current_command: current.to_string(),
                executed_commands: records,
            },
        )
    }

    #[test]
    fn booting_renders_banner_and_empty_prompt() {
        let renderer = TextRenderer::default();
        let lines = renderer.render(&snapshot(TerminalState::Booting, "", Vec::new()));

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "[root ~]$ ");
    }

    #[test]
    fn unfocused_prompt_has_no_cursor() {
        let renderer = TextRenderer::default();
        let lines = renderer.render(&snapshot(TerminalState::READY, "ls", Vec::new()));
        assert_eq!(lines.last().unwrap(), "[root ~]$ ls");
    }

    #[test]
    fn empty_responses_are_omitted() {
        let renderer = TextRenderer::default();
        let lines = renderer.render(&snapshot(
            TerminalState::READY,
            "",
            vec![
                CommandRecord::new("frobnicate", Vec::new()),
                CommandRecord::new("pwd", vec!["/root".into()]),
            ],
        ));

        assert_eq!(
            lines[1..],
            [
                "[root ~]$ frobnicate".to_string(),
                "[root ~]$ pwd".to_string(),
                "/root".to_string(),
                "[root ~]$ ".to_string(),
            ]
        );
    }

    #[test]
    fn uses_configured_prompt_and_cursor() {
        let renderer = TextRenderer::new(TerminalConfig {
            prompt: "$ ".into(),
            cursor: '_',
            ..TerminalConfig::default()
        });
        let frame = renderer.frame(&snapshot(
            TerminalState::Ready(crate::core::Focus::Focused),
            "echo",
            Vec::new(),
        ));

        assert!(frame.ends_with("\n$ echo_"));
    }
}
