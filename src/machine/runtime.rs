//! Prompt machine that applies events and tracks state history.

use crate::core::{Guard, PromptContext, State, StateHistory, StateTransition, TerminalState};
use crate::event::Event;
use crate::machine::transition::{has_pressed_enter, transition};
use crate::machine::{Activity, Effect};
use crate::render::Snapshot;
use crate::resolver::CommandResolver;
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Collaborators the transition function reads but never owns.
///
/// Only [`PromptMachineBuilder`](crate::builder::PromptMachineBuilder)
/// assembles one, after checking the clear command:
///
/// ```compile_fail
/// use std::sync::Arc;
/// use termprompt::machine::MachineEnv;
/// use termprompt::resolver::StaticCommands;
///
/// let env = MachineEnv::from_shared(Arc::new(StaticCommands::new())).with_clear_command("");
/// ```
pub struct MachineEnv {
    pub(crate) resolver: Arc<dyn CommandResolver>,
    pub(crate) submit_guard: Guard<PromptContext, Event>,
    pub(crate) clear_command: String,
}

impl MachineEnv {
    #[cfg(test)]
    pub(crate) fn new(resolver: impl CommandResolver + 'static) -> Self {
        Self::from_shared(Arc::new(resolver))
    }

    pub(crate) fn from_shared(resolver: Arc<dyn CommandResolver>) -> Self {
        Self {
            resolver,
            submit_guard: has_pressed_enter(),
            clear_command: "clear".to_string(),
        }
    }

    pub(crate) fn with_clear_command(mut self, command: impl Into<String>) -> Self {
        self.clear_command = command.into();
        self
    }

    pub(crate) fn with_submit_guard(mut self, guard: Guard<PromptContext, Event>) -> Self {
        self.submit_guard = guard;
        self
    }

    /// Submission that wipes the history instead of being resolved.
    pub fn clear_command(&self) -> &str {
        &self.clear_command
    }
}

impl fmt::Debug for MachineEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineEnv")
            .field("clear_command", &self.clear_command)
            .finish_non_exhaustive()
    }
}

/// Result of sending one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The current state had a transition for the event.
    Handled { effects: Vec<Effect> },
    /// No transition for the event in the current state, or the machine
    /// is stopped.
    Ignored,
}

impl Outcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Outcome::Handled { .. })
    }

    pub fn effects(&self) -> &[Effect] {
        match self {
            Outcome::Handled { effects } => effects,
            Outcome::Ignored => &[],
        }
    }

    pub fn into_effects(self) -> Vec<Effect> {
        match self {
            Outcome::Handled { effects } => effects,
            Outcome::Ignored => Vec::new(),
        }
    }
}

/// Prompt state machine instance.
///
/// Processes one event to completion per [`send`](Self::send) call and
/// returns the effects the host must run.
pub struct PromptMachine {
    session: Uuid,
    current: TerminalState,
    context: PromptContext,
    env: MachineEnv,
    history: StateHistory<TerminalState>,
    stopped: bool,
}

impl PromptMachine {
    /// Create a machine in `booting` with an empty context.
    pub(crate) fn new(env: MachineEnv, history: StateHistory<TerminalState>) -> Self {
        Self {
            session: Uuid::new_v4(),
            current: TerminalState::Booting,
            context: PromptContext::new(),
            env,
            history,
            stopped: false,
        }
    }

    /// Identifier of this machine instance.
    pub fn session(&self) -> Uuid {
        self.session
    }

    pub fn current_state(&self) -> &TerminalState {
        &self.current
    }

    pub fn context(&self) -> &PromptContext {
        &self.context
    }

    pub fn history(&self) -> &StateHistory<TerminalState> {
        &self.history
    }

    pub fn env(&self) -> &MachineEnv {
        &self.env
    }

    /// Check the current state against a dotted path such as `ready.focused`.
    pub fn matches(&self, path: &str) -> bool {
        self.current.matches(path)
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Apply one event and return the effects the host must run.
    /// Events the current state does not handle are dropped.
    pub fn send(&mut self, event: Event) -> Outcome {
        if self.stopped {
            tracing::trace!(
                session = %self.session,
                event = event.name(),
                "Machine stopped; event dropped"
            );
            return Outcome::Ignored;
        }

        let from = self.current;
        let context = std::mem::take(&mut self.context);
        let step = transition(from, context, &event, &self.env);

        self.context = step.context;
        if !step.handled {
            tracing::trace!(
                session = %self.session,
                state = %from,
                event = event.name(),
                "Event ignored"
            );
            return Outcome::Ignored;
        }

        if step.state != from {
            tracing::debug!(
                session = %self.session,
                from = %from,
                to = %step.state,
                event = event.name(),
                "State changed"
            );
            self.history.push(StateTransition {
                from,
                to: step.state,
                event: event.name().to_string(),
                timestamp: Utc::now(),
            });
            self.current = step.state;
        }

        if matches!(event, Event::KeyDown { .. }) && !step.effects.is_empty() {
            tracing::debug!(
                session = %self.session,
                history = self.context.executed_commands.len(),
                "Command submitted"
            );
        }

        Outcome::Handled {
            effects: step.effects,
        }
    }

    /// Stop the machine. Leaving `ready` this way stops its activities;
    /// the returned effects must still be run by the host. Later events
    /// are dropped.
    pub fn stop(&mut self) -> Vec<Effect> {
        if self.stopped {
            return Vec::new();
        }
        self.stopped = true;
        tracing::debug!(session = %self.session, state = %self.current, "Machine stopped");

        match self.current {
            TerminalState::Ready(_) => vec![Effect::StopActivity(Activity::FocusTracking)],
            TerminalState::Booting => Vec::new(),
        }
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.session, self.current, self.context.clone())
    }
}

impl fmt::Debug for PromptMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptMachine")
            .field("session", &self.session)
            .field("current", &self.current)
            .field("context", &self.context)
            .field("stopped", &self.stopped)
            .finish_non_exhaustive()
    }
}
