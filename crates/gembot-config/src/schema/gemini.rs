//! Remote model settings.

use gembot_common::ConfigError;
use serde::{Deserialize, Serialize};

use crate::env::API_KEY_VARS;

/// Gemini model settings. `api_key` is environment-only.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    #[serde(skip)]
    pub api_key: Option<String>,
    pub model: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Output token cap per response (valid range: 1-65536).
    pub max_tokens: u32,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.0-flash".to_string(),
            temperature: 0.7,
            max_tokens: 4096,
        }
    }
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl GeminiSettings {
    /// The API key, or a `MissingCredential` error naming the primary
    /// environment variable.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingCredential(API_KEY_VARS[0]))
    }
}
