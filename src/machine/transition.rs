//! Pure transition function.

use crate::core::{CommandRecord, Focus, Guard, PromptContext, TerminalState};
use crate::event::{Event, Key};
use crate::machine::{Activity, Effect, MachineEnv};

/// Outcome of applying one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub state: TerminalState,
    pub context: PromptContext,
    /// Effects in the order the host must run them.
    pub effects: Vec<Effect>,
    /// False when the current state has no transition for the event.
    pub handled: bool,
}

impl Step {
    fn ignored(state: TerminalState, context: PromptContext) -> Self {
        Self {
            state,
            context,
            effects: Vec::new(),
            handled: false,
        }
    }

    fn to(state: TerminalState, context: PromptContext, effects: Vec<Effect>) -> Self {
        Self {
            state,
            context,
            effects,
            handled: true,
        }
    }
}

/// What a submit did to the context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Commit {
    /// Nothing was typed.
    Skipped,
    /// The clear command wiped the history.
    Cleared,
    /// A record was appended.
    Recorded,
}

/// Default submit guard: the key is `Enter`.
pub fn has_pressed_enter() -> Guard<PromptContext, Event> {
    Guard::new(|_: &PromptContext, event: &Event| {
        matches!(event, Event::KeyDown { key: Key::Enter })
    })
}

/// Submit the current command as one atomic context update.
pub fn commit(context: PromptContext, env: &MachineEnv) -> (PromptContext, Commit) {
    if context.current_command.is_empty() {
        return (context, Commit::Skipped);
    }

    if context.current_command == env.clear_command {
        return (PromptContext::new(), Commit::Cleared);
    }

    let PromptContext {
        current_command,
        mut executed_commands,
    } = context;
    let response = env.resolver.resolve_lines(&current_command);
    executed_commands.push(CommandRecord::new(current_command, response));

    (
        PromptContext {
            current_command: String::new(),
            executed_commands,
        },
        Commit::Recorded,
    )
}

/// Apply `event` to `state` and `context`.
///
/// Total: events with no transition from `state` come back with
/// `handled == false` and everything unchanged.
pub fn transition(
    state: TerminalState,
    context: PromptContext,
    event: &Event,
    env: &MachineEnv,
) -> Step {
    use Focus::{Focused, NotFocused};
    use TerminalState::{Booting, Ready};

    match (state, event) {
        (Booting, Event::Booted) => Step::to(
            TerminalState::READY,
            context,
            vec![Effect::StartActivity(Activity::FocusTracking)],
        ),
        (Booting, _) => Step::ignored(state, context),

        (Ready(NotFocused), Event::Focus) => {
            Step::to(Ready(Focused), context, vec![Effect::SetInputFocused])
        }
        (Ready(Focused), Event::Focus) => {
            Step::to(Ready(Focused), context, vec![Effect::SetInputFocused])
        }
        (Ready(Focused), Event::NotFocused) => Step::to(Ready(NotFocused), context, Vec::new()),
        (Ready(Focused), Event::UpdateCurrentCommand { text }) => Step::to(
            state,
            PromptContext {
                current_command: text.clone(),
                ..context
            },
            Vec::new(),
        ),
        (Ready(Focused), Event::KeyDown { .. }) => {
            if !env.submit_guard.check(&context, event) {
                return Step::ignored(state, context);
            }
            let (context, outcome) = commit(context, env);
            let effects = match outcome {
                Commit::Skipped => Vec::new(),
                Commit::Cleared | Commit::Recorded => vec![Effect::ClearCommandInput],
            };
            Step::to(state, context, effects)
        }

        (Ready(_), _) => Step::ignored(state, context),
    }
}
