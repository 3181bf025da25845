//! Builder API for prompt machine construction.
//!
//! The builder is where the machine's collaborators are injected: the
//! command resolver, the clear command and, optionally, a replacement
//! submit guard.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::PromptMachineBuilder;

use crate::machine::PromptMachine;
use crate::resolver::CommandResolver;

/// Build a machine with default settings around `resolver`.
///
/// # Example
///
/// ```
/// use termprompt::builder::prompt_machine;
/// use termprompt::resolver::StaticCommands;
///
/// let machine = prompt_machine(StaticCommands::new().with("pwd", "/root")).unwrap();
/// assert!(machine.matches("booting"));
/// ```
pub fn prompt_machine(
    resolver: impl CommandResolver + 'static,
) -> Result<PromptMachine, BuildError> {
    PromptMachineBuilder::new().resolver(resolver).build()
}
