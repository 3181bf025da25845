//! Build errors for the prompt machine builder.

use thiserror::Error;

/// Errors that can occur when building a prompt machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Command resolver not specified. Call .resolver(commands) before .build()")]
    MissingResolver,

    #[error("Clear command must not be empty")]
    EmptyClearCommand,

    #[error("Clear command '{command}' is handled by the machine but also has a resolver entry")]
    ClearCommandShadowed { command: String },
}
