//! Property-based tests for the prompt machine.
//!
//! These tests use proptest to verify the machine's invariants across many
//! randomly generated event sequences.

use proptest::prelude::*;
use termprompt::core::{Focus, State, TerminalState};
use termprompt::event::Event;
use termprompt::machine::{Effect, PromptMachine};
use termprompt::resolver::StaticCommands;
use termprompt::PromptMachineBuilder;

fn machine() -> PromptMachine {
    PromptMachineBuilder::new()
        .resolver(
            StaticCommands::new()
                .with("ls", vec!["a.txt", "b.txt"])
                .with("pwd", "/root"),
        )
        .build()
        .unwrap()
}

fn focused_machine() -> PromptMachine {
    let mut machine = machine();
    machine.send(Event::Booted);
    machine.send(Event::Focus);
    machine
}

prop_compose! {
    fn arbitrary_text()(text in prop_oneof![
        Just(String::new()),
        Just("clear".to_string()),
        Just("ls".to_string()),
        Just("pwd".to_string()),
        "[a-z ]{1,12}",
    ]) -> String {
        text
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..6u8, text in arbitrary_text()) -> Event {
        match variant {
            0 => Event::Booted,
            1 => Event::Focus,
            2 => Event::NotFocused,
            3 => Event::update(text),
            4 => Event::key_down("Enter"),
            _ => Event::key_down(text),
        }
    }
}

proptest! {
    #[test]
    fn history_never_holds_empty_commands(
        events in prop::collection::vec(arbitrary_event(), 0..60)
    ) {
        let mut machine = machine();
        for event in events {
            machine.send(event);
            prop_assert!(machine
                .context()
                .executed_commands
                .iter()
                .all(|record| !record.command.is_empty()));
            prop_assert!(machine
                .context()
                .executed_commands
                .iter()
                .all(|record| record.command != "clear"));
        }
    }

    #[test]
    fn booting_gate_holds_until_booted(
        events in prop::collection::vec(arbitrary_event(), 0..30)
    ) {
        let mut machine = machine();
        for event in events.into_iter().filter(|e| *e != Event::Booted) {
            let outcome = machine.send(event);
            prop_assert!(!outcome.is_handled());
            prop_assert_eq!(machine.current_state(), &TerminalState::Booting);
            prop_assert!(machine.context().is_idle());
            prop_assert!(machine.context().executed_commands.is_empty());
        }

        machine.send(Event::Booted);
        prop_assert_eq!(machine.current_state(), &TerminalState::Ready(Focus::NotFocused));
    }

    #[test]
    fn repeated_focus_is_idempotent(text in arbitrary_text(), repeats in 1..5usize) {
        let mut machine = focused_machine();
        machine.send(Event::update(text));
        let before = machine.context().clone();

        for _ in 0..repeats {
            let outcome = machine.send(Event::Focus);
            prop_assert_eq!(outcome.effects(), &[Effect::SetInputFocused]);
            prop_assert!(machine.matches("ready.focused"));
            prop_assert_eq!(machine.context(), &before);
        }
    }

    #[test]
    fn clear_resets_any_history(
        commands in prop::collection::vec("[a-z]{1,8}", 0..10)
    ) {
        let mut machine = focused_machine();
        for command in commands.iter().filter(|c| c.as_str() != "clear") {
            machine.send(Event::update(command.clone()));
            machine.send(Event::key_down("Enter"));
        }

        machine.send(Event::update("clear"));
        let outcome = machine.send(Event::key_down("Enter"));

        prop_assert_eq!(outcome.effects(), &[Effect::ClearCommandInput]);
        prop_assert!(machine.context().is_idle());
        prop_assert!(machine.context().executed_commands.is_empty());
    }

    #[test]
    fn submissions_append_in_order(
        commands in prop::collection::vec("[a-z]{1,8}", 1..10)
    ) {
        let mut machine = focused_machine();
        let expected: Vec<String> = commands
            .into_iter()
            .filter(|c| c.as_str() != "clear")
            .collect();

        for command in &expected {
            machine.send(Event::update(command.clone()));
            machine.send(Event::key_down("Enter"));
            prop_assert!(machine.context().is_idle());
        }

        let recorded: Vec<&str> = machine
            .context()
            .executed_commands
            .iter()
            .map(|record| record.command.as_str())
            .collect();
        prop_assert_eq!(recorded, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn state_path_is_always_consistent(
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        let mut machine = machine();
        for event in events {
            machine.send(event);
            let state = machine.current_state();
            prop_assert!(machine.matches(state.path()));
            prop_assert_eq!(state.is_focused(), machine.matches("ready.focused"));
        }
    }

    #[test]
    fn history_path_tracks_state_changes(
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        let mut machine = machine();
        for event in events {
            machine.send(event);
        }

        let path = machine.history().get_path();
        if let Some(last) = path.last() {
            prop_assert_eq!(*last, machine.current_state());
            prop_assert_eq!(path[0], &TerminalState::Booting);
        }
        for pair in path.windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }
    }
}
