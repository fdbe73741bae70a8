//! Settings for the built-in tools: the SMTP relay and the clock zone.

use chrono_tz::Tz;
use gembot_common::ConfigError;
use serde::{Deserialize, Serialize};

/// SMTP relay used by the email tool. `sender` and `password` are
/// environment-only.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpConfig {
    pub host: String,
    /// Implicit-TLS port.
    pub port: u16,
    #[serde(skip)]
    pub sender: Option<String>,
    #[serde(skip)]
    pub password: Option<String>,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_string(),
            port: 465,
            sender: None,
            password: None,
        }
    }
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("sender", &self.sender)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl SmtpConfig {
    /// Sender address and password, if both are present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let sender = self.sender.as_deref().filter(|s| !s.is_empty())?;
        let password = self.password.as_deref().filter(|s| !s.is_empty())?;
        Some((sender, password))
    }
}

/// Zone the clock tools report in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// IANA zone name.
    pub timezone: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            timezone: "Asia/Jakarta".to_string(),
        }
    }
}

impl ClockConfig {
    pub fn tz(&self) -> Result<Tz, ConfigError> {
        self.timezone.parse::<Tz>().map_err(|_| {
            ConfigError::ValidationError(format!("unknown timezone '{}'", self.timezone))
        })
    }
}
