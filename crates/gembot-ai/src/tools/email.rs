//! Email tool sending plain-text mail through an implicit-TLS SMTP relay.

use async_trait::async_trait;
use gembot_config::SmtpConfig;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, warn};

use super::{ParamType, ToolArgs, ToolCallResult, ToolDeclaration, ToolError, ToolHandler};

const MISSING_FIELDS: &str = "Missing required fields: subject, to, or content.";
const AUTH_FAILED: &str = "SMTP Authentication Failed. Check credentials.";

/// SMTP reply code for rejected credentials.
const SMTP_AUTH_REJECTED: &str = "535";

/// Sends one message per call. Each call opens its own connection, which is
/// closed when the call returns.
pub struct EmailTool {
    smtp: SmtpConfig,
}

impl EmailTool {
    pub fn new(smtp: SmtpConfig) -> Self {
        Self { smtp }
    }

    pub fn declaration() -> ToolDeclaration {
        ToolDeclaration::new("send_email", "Send email message")
            .required_param("subject", ParamType::String, "Subject of the message")
            .required_param("to", ParamType::String, "email address destination")
            .required_param("content", ParamType::String, "content of the email message")
    }

    /// Send the message. Every failure is reported in the returned result.
    pub async fn send(&self, subject: &str, to: &str, content: &str) -> ToolCallResult {
        if subject.is_empty() || to.is_empty() || content.is_empty() {
            return ToolCallResult::error(MISSING_FIELDS);
        }

        let Some((sender, password)) = self.smtp.credentials() else {
            warn!("SMTP sender or password not configured");
            return ToolCallResult::error(AUTH_FAILED);
        };

        let message = match build_message(sender, to, subject, content) {
            Ok(message) => message,
            Err(e) => return ToolCallResult::error(format!("An error occurred: {e}")),
        };

        let transport = match AsyncSmtpTransport::<Tokio1Executor>::relay(&self.smtp.host) {
            Ok(builder) => builder
                .port(self.smtp.port)
                .credentials(Credentials::new(sender.to_string(), password.to_string()))
                .build(),
            Err(e) => return ToolCallResult::error(format!("An error occurred: {e}")),
        };

        match transport.send(message).await {
            Ok(_) => {
                info!(to, subject, "Email sent");
                ToolCallResult::success(format!("Email successfully sent to {to}"))
            }
            Err(e) if is_auth_failure(&e) => {
                warn!(error = %e, "SMTP authentication failed");
                ToolCallResult::error(AUTH_FAILED)
            }
            Err(e) => {
                warn!(error = %e, "Error sending email");
                ToolCallResult::error(format!("An error occurred: {e}"))
            }
        }
    }
}

#[async_trait]
impl ToolHandler for EmailTool {
    async fn call(&self, args: &ToolArgs) -> Result<ToolCallResult, ToolError> {
        Ok(self
            .send(
                str_arg(args, "subject"),
                str_arg(args, "to"),
                str_arg(args, "content"),
            )
            .await)
    }
}

/// Missing or non-string arguments read as empty.
fn str_arg<'a>(args: &'a ToolArgs, key: &str) -> &'a str {
    args.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

fn build_message(from: &str, to: &str, subject: &str, content: &str) -> Result<Message, String> {
    let from: Mailbox = from
        .parse()
        .map_err(|e| format!("invalid sender address '{from}': {e}"))?;
    let to_mailbox: Mailbox = to
        .parse()
        .map_err(|e| format!("invalid recipient address '{to}': {e}"))?;

    Message::builder()
        .from(from)
        .to(to_mailbox)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(content.to_string())
        .map_err(|e| e.to_string())
}

fn is_auth_failure(err: &lettre::transport::smtp::Error) -> bool {
    err.status()
        .is_some_and(|code| code.to_string() == SMTP_AUTH_REJECTED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::to_gemini_tool;
    use serde_json::json;

    fn configured() -> SmtpConfig {
        SmtpConfig {
            // Never reached: every test below fails before connecting.
            host: "smtp.invalid".into(),
            sender: Some("bot@example.com".into()),
            password: Some("app-password".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn empty_fields_fail_fast() {
        let tool = EmailTool::new(configured());
        for (subject, to, content) in [
            ("", "a@example.com", "hi"),
            ("hello", "", "hi"),
            ("hello", "a@example.com", ""),
        ] {
            let result = tool.send(subject, to, content).await;
            assert_eq!(result, ToolCallResult::error(MISSING_FIELDS));
        }
    }

    #[tokio::test]
    async fn missing_arguments_count_as_empty() {
        let tool = EmailTool::new(configured());
        let args = json!({ "subject": "hello", "to": "a@example.com" });
        let result = tool.call(args.as_object().unwrap()).await.unwrap();
        assert_eq!(result, ToolCallResult::error(MISSING_FIELDS));
    }

    #[tokio::test]
    async fn missing_credentials_report_auth_failure() {
        let tool = EmailTool::new(SmtpConfig::default());
        let result = tool.send("hi", "test@example.com", "hi").await;
        assert!(!result.is_success());
        assert!(result.message.starts_with("SMTP Authentication Failed"));
    }

    #[tokio::test]
    async fn invalid_recipient_is_error_result() {
        let tool = EmailTool::new(configured());
        let result = tool.send("hi", "not an address", "hello").await;
        assert!(!result.is_success());
        assert!(result.message.starts_with("An error occurred:"));
        assert!(result.message.contains("not an address"));
    }

    #[test]
    fn declaration_requires_all_fields() {
        let decl = EmailTool::declaration();
        assert_eq!(decl.name(), "send_email");
        for field in ["subject", "to", "content"] {
            assert!(decl.is_required(field), "{field} should be required");
        }
    }

    #[test]
    fn wire_schema_keeps_field_order() {
        let tool = to_gemini_tool(&EmailTool::declaration());
        let keys: Vec<&str> = tool["parameters"]["properties"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["subject", "to", "content"]);
    }
}
