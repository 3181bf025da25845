//! Termprompt: the interaction state machine of a simulated terminal widget
//!
//! Termprompt follows a "pure core, imperative shell" design. The machine
//! tracks focus, the command being typed and the history of submitted
//! commands as plain data, and every transition is a pure function. The
//! host (a GUI, a TUI, a web view bridge) feeds events in, runs the effects
//! the machine asks for and renders snapshots.
//!
//! # Core Concepts
//!
//! - **State**: `booting`, then `ready` with a nested focus sub-state
//! - **Context**: the command being composed and the submitted history
//! - **Events**: a closed set, validated at the host boundary
//! - **Effects**: directives for the host, never executed by the machine
//! - **Activities**: host subscriptions bound to the lifetime of a state
//!
//! # Example
//!
//! ```rust
//! use termprompt::builder::PromptMachineBuilder;
//! use termprompt::event::Event;
//! use termprompt::machine::Effect;
//! use termprompt::resolver::StaticCommands;
//!
//! let mut machine = PromptMachineBuilder::new()
//!     .resolver(StaticCommands::new().with("pwd", "/root"))
//!     .build()
//!     .unwrap();
//!
//! machine.send(Event::Booted);
//! machine.send(Event::Focus);
//! machine.send(Event::update("pwd"));
//! let effects = machine.send(Event::key_down("Enter")).into_effects();
//!
//! assert_eq!(effects, vec![Effect::ClearCommandInput]);
//! assert_eq!(machine.context().executed_commands[0].response, vec!["/root"]);
//! assert!(machine.matches("ready.focused"));
//! ```

pub mod activity;
pub mod builder;
pub mod config;
pub mod core;
pub mod event;
pub mod machine;
pub mod render;
pub mod resolver;
pub mod session;

// Re-export commonly used types
pub use builder::{BuildError, PromptMachineBuilder};
pub use crate::core::{CommandRecord, Focus, PromptContext, State, TerminalState};
pub use event::{Event, Key, RawEvent};
pub use machine::{Effect, Outcome, PromptMachine};
pub use render::{Snapshot, TextRenderer};
pub use resolver::{CommandResolver, Response, StaticCommands};
pub use session::{Host, Session};
