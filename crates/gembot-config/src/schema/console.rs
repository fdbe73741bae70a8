//! Console transcript and logging settings.

use serde::{Deserialize, Serialize};

/// Interactive console settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Printed once when the session starts.
    pub banner: String,
    pub user_label: String,
    pub bot_label: String,
    /// Line that ends the session (compared case-insensitively).
    pub quit_command: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            banner: "Chat started. Type 'quit' to exit.".to_string(),
            user_label: "You: ".to_string(),
            bot_label: "Bot: ".to_string(),
            quit_command: "quit".to_string(),
        }
    }
}

impl ConsoleConfig {
    pub fn is_quit(&self, line: &str) -> bool {
        line.trim().eq_ignore_ascii_case(&self.quit_command)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when neither `--log-level` nor
    /// `RUST_LOG` is given.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
