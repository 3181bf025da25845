//! Builder for constructing prompt machines.

use crate::builder::error::BuildError;
use crate::config::TerminalConfig;
use crate::core::{Guard, PromptContext, StateHistory};
use crate::event::Event;
use crate::machine::{MachineEnv, PromptMachine};
use crate::resolver::CommandResolver;
use std::sync::Arc;

/// Builder for constructing prompt machines with a fluent API.
pub struct PromptMachineBuilder {
    resolver: Option<Arc<dyn CommandResolver>>,
    submit_guard: Option<Guard<PromptContext, Event>>,
    clear_command: String,
    history_limit: Option<usize>,
}

impl PromptMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            resolver: None,
            submit_guard: None,
            clear_command: TerminalConfig::default().clear_command,
            history_limit: TerminalConfig::default().history_limit,
        }
    }

    /// Set the command resolver (required).
    pub fn resolver(mut self, resolver: impl CommandResolver + 'static) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    /// Share an existing resolver between machines.
    pub fn shared_resolver(mut self, resolver: Arc<dyn CommandResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Take behavioral settings from a terminal config.
    pub fn config(mut self, config: &TerminalConfig) -> Self {
        self.clear_command = config.clear_command.clone();
        self.history_limit = config.history_limit;
        self
    }

    pub fn clear_command(mut self, command: impl Into<String>) -> Self {
        self.clear_command = command.into();
        self
    }

    /// Keep at most `limit` state changes in the machine's history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Keep every state change for the life of the machine.
    pub fn unbounded_history(mut self) -> Self {
        self.history_limit = None;
        self
    }

    /// Replace the submit guard. Defaults to "key is Enter".
    pub fn submit_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&PromptContext, &Event) -> bool + Send + Sync + 'static,
    {
        self.submit_guard = Some(Guard::new(predicate));
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing or inconsistent.
    pub fn build(self) -> Result<PromptMachine, BuildError> {
        let resolver = self.resolver.ok_or(BuildError::MissingResolver)?;

        if self.clear_command.is_empty() {
            return Err(BuildError::EmptyClearCommand);
        }
        if resolver.resolve(&self.clear_command).is_some() {
            return Err(BuildError::ClearCommandShadowed {
                command: self.clear_command,
            });
        }

        let mut env = MachineEnv::from_shared(resolver).with_clear_command(self.clear_command);
        if let Some(guard) = self.submit_guard {
            env = env.with_submit_guard(guard);
        }

        let history = match self.history_limit {
            Some(limit) => StateHistory::bounded(limit),
            None => StateHistory::new(),
        };

        Ok(PromptMachine::new(env, history))
    }
}

impl Default for PromptMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
