//! Uniform tool outcome.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Success,
    Error,
}

/// What every tool returns, success or failure. Serializes as
/// `{"status": "success"|"error", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCallResult {
    pub status: ToolStatus,
    pub message: String,
}

impl ToolCallResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ToolStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ToolStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ToolStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_lowercase_status() {
        let json = serde_json::to_value(ToolCallResult::error("nope")).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "error", "message": "nope" }));
    }

    #[test]
    fn is_success() {
        assert!(ToolCallResult::success("ok").is_success());
        assert!(!ToolCallResult::error("bad").is_success());
    }
}
