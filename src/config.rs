//! Terminal presentation and behavior settings.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration or command tables.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// State changes kept by default; every click toggles focus once.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// Settings shared by the machine builder and the text renderer.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use termprompt::config::TerminalConfig;
///
/// let config = TerminalConfig::from_json(r#"{"prompt": "$ "}"#).unwrap();
/// assert_eq!(config.prompt, "$ ");
/// assert_eq!(config.clear_command, "clear");
/// assert_eq!(config.banner(), "Last login: Sun Mar 14 23:14:25 on ttys001");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Printed before every command line.
    pub prompt: String,
    /// Submission that wipes the history instead of being resolved.
    pub clear_command: String,
    /// Shown in the banner above the history.
    pub last_login: DateTime<Utc>,
    pub tty: String,
    /// Drawn after the live input while focused.
    pub cursor: char,
    /// Most recent state changes the machine keeps. `None` keeps all.
    pub history_limit: Option<usize>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "[root ~]$ ".to_string(),
            clear_command: "clear".to_string(),
            last_login: Utc
                .with_ymd_and_hms(2021, 3, 14, 23, 14, 25)
                .single()
                .unwrap_or_default(),
            tty: "ttys001".to_string(),
            cursor: '█',
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }
}

impl TerminalConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Banner line, e.g. `Last login: Sun Mar 14 23:14:25 on ttys001`.
    pub fn banner(&self) -> String {
        format!(
            "Last login: {} on {}",
            self.last_login.format("%a %b %e %H:%M:%S"),
            self.tty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_prompt() {
        let config = TerminalConfig::default();
        assert_eq!(config.prompt, "[root ~]$ ");
        assert_eq!(config.clear_command, "clear");
        assert_eq!(config.tty, "ttys001");
        assert_eq!(config.cursor, '█');
        assert_eq!(config.history_limit, Some(DEFAULT_HISTORY_LIMIT));
    }

    #[test]
    fn banner_pads_single_digit_days() {
        let config = TerminalConfig {
            last_login: Utc.with_ymd_and_hms(2021, 3, 4, 9, 5, 0).unwrap(),
            tty: "ttys002".into(),
            ..TerminalConfig::default()
        };

        assert_eq!(config.banner(), "Last login: Thu Mar  4 09:05:00 on ttys002");
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let result = TerminalConfig::from_json(r#"{"cursor": "too long"}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
