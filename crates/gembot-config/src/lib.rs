//! Gembot configuration system.
//!
//! Non-secret settings come from a TOML file in the platform config
//! directory; credentials come only from the process environment (optionally
//! seeded from a `.env` file). All sections use defaults so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gembot_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! let api_key = config.gemini.require_api_key().expect("no api key");
//! # let _ = api_key;
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BotConfig, ClockConfig, ConsoleConfig, GeminiSettings, LoggingConfig, SmtpConfig};

use std::path::Path;

use gembot_common::ConfigError;

/// Load the full configuration.
///
/// Order: `.env` in the working directory, then the TOML file (`path` if
/// given, else the platform default), then the environment overlay for
/// credentials. A missing API key is *not* an error here; callers that need
/// the model call [`GeminiSettings::require_api_key`].
pub fn load_config(path: Option<&Path>) -> Result<BotConfig, ConfigError> {
    let loaded = env::load_dotenv(Path::new(".env"));
    if loaded > 0 {
        tracing::debug!("loaded {loaded} variables from .env");
    }

    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    env::apply_env(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

/// Replace the configured model, e.g. from a command-line flag. The override
/// goes through the same check as the file value.
pub fn override_model(config: &mut BotConfig, model: &str) -> Result<(), ConfigError> {
    let model = model.trim();
    if model.is_empty() {
        return Err(ConfigError::ValidationError(
            "gemini.model must not be empty".into(),
        ));
    }
    config.gemini.model = model.to_string();
    Ok(())
}
