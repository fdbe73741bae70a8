//! AI engine for Gembot.
//!
//! Provides the Gemini chat client, the tool registry with the built-in
//! clock and email tools, and the conversation session that performs at
//! most one tool call per turn.

pub mod gemini;
pub mod session;
pub mod token_tracker;
pub mod tools;

use async_trait::async_trait;

pub use gemini::{GeminiChat, GeminiClient, GeminiConfig};
pub use session::Session;
pub use token_tracker::TokenTracker;
pub use tools::{
    builtin_registry, ClockTool, EmailTool, ToolArgs, ToolCallResult, ToolDeclaration, ToolError,
    ToolHandler, ToolRegistry, ToolStatus,
};

/// One content part of a model response.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text(String),
    FunctionCall { name: String, args: ToolArgs },
}

/// A model response reduced to the parts this crate understands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelResponse {
    pub parts: Vec<Part>,
    pub usage: TokenUsage,
}

/// What a round trip sends to the remote conversation.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatInput {
    Prompt(String),
    FunctionResult {
        name: String,
        response: serde_json::Value,
    },
}

impl ChatInput {
    /// Wrap a tool result the way the model expects it: `{"result": ...}`.
    pub fn function_result(name: impl Into<String>, result: &ToolCallResult) -> Self {
        Self::FunctionResult {
            name: name.into(),
            response: serde_json::json!({ "result": result }),
        }
    }
}

/// A live remote conversation. The handle owns whatever history the remote
/// side needs; callers never keep their own copy.
#[async_trait]
pub trait ChatHandle: Send {
    /// One round trip. A `Prompt` starts a new turn.
    async fn send(&mut self, input: ChatInput) -> Result<ModelResponse, AiError>;

    /// Drop everything recorded since the start of the current turn.
    fn abandon_turn(&mut self);
}

/// Something that can open a conversation with a fixed set of tools.
pub trait ChatModel {
    type Chat: ChatHandle;

    fn start_chat(self, declarations: Vec<ToolDeclaration>) -> Self::Chat;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error(transparent)]
    Tool(#[from] ToolError),
}
