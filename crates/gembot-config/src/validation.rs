//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError::ValidationError`.

use crate::schema::BotConfig;
use gembot_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BotConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    let gemini = &config.gemini;
    if gemini.model.trim().is_empty() {
        errors.push("gemini.model must not be empty".into());
    }
    validate_range_f64(&mut errors, "gemini.temperature", gemini.temperature, 0.0, 2.0);
    validate_range(&mut errors, "gemini.max_tokens", gemini.max_tokens, 1, 65536);

    if config.smtp.host.trim().is_empty() {
        errors.push("smtp.host must not be empty".into());
    }
    if config.smtp.port == 0 {
        errors.push("smtp.port must not be 0".into());
    }

    if let Err(e) = config.clock.tz() {
        errors.push(e.to_string());
    }

    let console = &config.console;
    for (name, value) in [
        ("console.user_label", &console.user_label),
        ("console.bot_label", &console.bot_label),
        ("console.quit_command", &console.quit_command),
    ] {
        if value.trim().is_empty() {
            errors.push(format!("{name} must not be empty"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&BotConfig::default()).is_ok());
    }

    #[test]
    fn out_of_range_values_are_collected() {
        let mut config = BotConfig::default();
        config.gemini.temperature = -1.0;
        config.gemini.max_tokens = 0;
        config.smtp.port = 0;

        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("gemini.temperature"));
        assert!(err.contains("gemini.max_tokens"));
        assert!(err.contains("smtp.port"));
    }

    #[test]
    fn nan_temperature_is_rejected() {
        let mut config = BotConfig::default();
        config.gemini.temperature = f64::NAN;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        let mut config = BotConfig::default();
        config.clock.timezone = "Atlantis/Capital".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("Atlantis/Capital"));
    }

    #[test]
    fn empty_quit_command_is_rejected() {
        let mut config = BotConfig::default();
        config.console.quit_command = "  ".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("console.quit_command"));
    }
}
