//! Configuration schema types for Gembot.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Credential fields are `serde(skip)`: they are filled from the environment
//! and never round-trip through a file.

mod console;
mod gemini;
mod tools;

pub use console::*;
pub use gemini::*;
pub use tools::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Gembot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub gemini: GeminiSettings,
    pub smtp: SmtpConfig,
    pub clock: ClockConfig,
    pub console: ConsoleConfig,
    pub logging: LoggingConfig,
}
