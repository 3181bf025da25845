//! Command resolution.
//!
//! The machine never interprets commands beyond the privileged clear
//! command. Everything else is an exact-key lookup into a resolver the
//! host supplies. A missing entry is a valid answer, not a fault.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canned output for a command: one line or several.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Line(String),
    Lines(Vec<String>),
}

impl Response {
    /// Normalize into an ordered list of lines.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Response::Line(line) => vec![line],
            Response::Lines(lines) => lines,
        }
    }
}

impl From<&str> for Response {
    fn from(line: &str) -> Self {
        Response::Line(line.to_string())
    }
}

impl From<String> for Response {
    fn from(line: String) -> Self {
        Response::Line(line)
    }
}

impl From<Vec<String>> for Response {
    fn from(lines: Vec<String>) -> Self {
        Response::Lines(lines)
    }
}

impl From<Vec<&str>> for Response {
    fn from(lines: Vec<&str>) -> Self {
        Response::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

/// Pure lookup from command name to canned response.
///
/// Implementations must be synchronous and deterministic, and must not
/// panic. Closures of the right shape implement this trait:
///
/// ```rust
/// use termprompt::resolver::{CommandResolver, Response};
///
/// let resolver = |name: &str| (name == "whoami").then(|| Response::from("root"));
/// assert_eq!(resolver.resolve("whoami"), Some(Response::from("root")));
/// assert_eq!(resolver.resolve("ls"), None);
/// ```
pub trait CommandResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<Response>;

    /// Resolve and normalize. Unknown commands yield no lines.
    fn resolve_lines(&self, name: &str) -> Vec<String> {
        self.resolve(name)
            .map(Response::into_lines)
            .unwrap_or_default()
    }
}

impl<F> CommandResolver for F
where
    F: Fn(&str) -> Option<Response> + Send + Sync,
{
    fn resolve(&self, name: &str) -> Option<Response> {
        self(name)
    }
}

/// Static command table.
///
/// # Example
///
/// ```rust
/// use termprompt::resolver::{CommandResolver, StaticCommands};
///
/// let commands = StaticCommands::new()
///     .with("ls", vec!["a.txt", "b.txt"])
///     .with("pwd", "/root");
///
/// assert_eq!(commands.resolve_lines("ls"), vec!["a.txt", "b.txt"]);
/// assert_eq!(commands.resolve_lines("pwd"), vec!["/root"]);
/// assert!(commands.resolve_lines("frobnicate").is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticCommands {
    table: HashMap<String, Response>,
}

impl StaticCommands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry.
    pub fn with(mut self, name: impl Into<String>, response: impl Into<Response>) -> Self {
        self.insert(name, response);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, response: impl Into<Response>) {
        self.table.insert(name.into(), response.into());
    }

    /// Load a table from a JSON object whose values are a string or an
    /// array of strings.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Command names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.table.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl CommandResolver for StaticCommands {
    fn resolve(&self, name: &str) -> Option<Response> {
        self.table.get(name).cloned()
    }
}
