//! TOML config file loading and creation.

#[cfg(test)]
mod tests;

use crate::schema::BotConfig;
use crate::validation;
use gembot_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Load config from a specific TOML file path.
///
/// Missing fields use serde defaults. If the parsed values fail validation,
/// a warning is logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<BotConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config = parse_str(&content)?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(BotConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Parse TOML text into a config without validating it.
pub fn parse_str(content: &str) -> Result<BotConfig, ConfigError> {
    toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/gembot/config.toml`
/// On macOS: `~/Library/Application Support/gembot/config.toml`
///
/// If the file does not exist, a commented default file is created and the
/// defaults are returned. Failing to create it is logged, not fatal.
pub fn load_default() -> Result<BotConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        if let Err(e) = create_default_config(&path) {
            warn!("{e}");
        }
        return Ok(BotConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::ParseError("could not determine config directory".into())
    })?;
    Ok(config_dir.join("gembot").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Default TOML config content. Credentials are deliberately absent: set
/// GOOGLE_API_KEY, EMAIL_ADDRESS and EMAIL_PASSWORD in the environment.
fn default_config_toml() -> &'static str {
    r##"# Gembot Configuration
# Only override what you want to change -- missing fields use defaults.
# Credentials are read from the environment (or a .env file):
#   GOOGLE_API_KEY, EMAIL_ADDRESS, EMAIL_PASSWORD

[gemini]
# model = "gemini-2.0-flash"
# temperature = 0.7      # 0.0-2.0
# max_tokens = 4096      # 1-65536

[smtp]
# host = "smtp.gmail.com"
# port = 465             # implicit TLS

[clock]
# timezone = "Asia/Jakarta"

[console]
# banner = "Chat started. Type 'quit' to exit."
# user_label = "You: "
# bot_label = "Bot: "
# quit_command = "quit"

[logging]
# level = "warn"         # tracing filter directive, e.g. "gembot_ai=debug"
"##
}
