//! Core prompt machine types.
//!
//! This module contains the pure data of the machine:
//! - Hierarchical states via `TerminalState` and the `State` trait
//! - The context (`PromptContext`, `CommandRecord`)
//! - Guard predicates over context and event
//! - History of state changes
//!
//! Nothing in this module performs I/O.

mod context;
mod guard;
mod history;
mod state;

pub use context::{CommandRecord, PromptContext};
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{Focus, State, TerminalState};
