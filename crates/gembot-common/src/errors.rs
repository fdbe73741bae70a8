use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("missing credential: {0} is not set in the environment or .env file")]
    MissingCredential(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum GembotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ai error: {0}")]
    Ai(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("unknown timezone 'Mars/Olympus'".into());
        assert_eq!(
            err.to_string(),
            "config validation error: unknown timezone 'Mars/Olympus'"
        );
    }

    #[test]
    fn missing_credential_names_the_variable() {
        let err = ConfigError::MissingCredential("GOOGLE_API_KEY");
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
    }

    #[test]
    fn gembot_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: GembotError = config_err.into();
        assert!(matches!(err, GembotError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn gembot_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: GembotError = io_err.into();
        assert!(matches!(err, GembotError::Io(_)));
        assert!(err.to_string().contains("stdin closed"));
    }

    #[test]
    fn gembot_error_ai_display() {
        let err = GembotError::Ai("model unavailable".into());
        assert_eq!(err.to_string(), "ai error: model unavailable");
    }
}
