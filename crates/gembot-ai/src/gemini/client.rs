//! Gemini API client struct, request building, and response parsing.

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::{AiError, ChatInput, ModelResponse, Part, TokenUsage};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

/// A parsed response plus the raw candidate content, which goes back into
/// the conversation history verbatim.
pub(crate) struct ParsedResponse {
    pub response: ModelResponse,
    pub content: Option<Value>,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.config.model)
    }

    /// Build the JSON request body for the Gemini API.
    ///
    /// `declarations` is the `functionDeclarations` array; an empty array
    /// leaves `tools` out entirely.
    pub(crate) fn build_request_body(&self, contents: &[Value], declarations: &[Value]) -> Value {
        let mut body = json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        if !declarations.is_empty() {
            body["tools"] = json!([{
                "functionDeclarations": declarations
            }]);
        }

        body
    }

    /// Parse a Gemini response.
    pub(crate) fn parse_response(json: Value) -> Result<ParsedResponse, AiError> {
        if !json.is_object() {
            return Err(AiError::ParseError("response is not a JSON object".to_string()));
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        let Some(first) = json["candidates"].as_array().and_then(|c| c.first()) else {
            if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                warn!(reason, "Gemini blocked the prompt");
            }
            return Ok(ParsedResponse {
                response: ModelResponse {
                    parts: Vec::new(),
                    usage,
                },
                content: None,
            });
        };

        if let Some(reason) = first["finishReason"].as_str() {
            debug!(reason, "Gemini finish reason");
        }

        let parts = first["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter().filter_map(parse_part).collect())
            .unwrap_or_default();

        let content = first.get("content").cloned().map(|mut content| {
            if content.get("role").is_none() {
                content["role"] = json!("model");
            }
            content
        });

        Ok(ParsedResponse {
            response: ModelResponse { parts, usage },
            content,
        })
    }
}

/// Map one raw part onto [`Part`]. Anything that is neither a function call
/// nor text is skipped.
pub(crate) fn parse_part(part: &Value) -> Option<Part> {
    if let Some(fc) = part.get("functionCall") {
        return Some(Part::FunctionCall {
            name: fc["name"].as_str().unwrap_or("").to_string(),
            args: fc["args"].as_object().cloned().unwrap_or_default(),
        });
    }
    part["text"].as_str().map(|text| Part::Text(text.to_string()))
}

/// The `contents` entry for one outgoing input.
pub(crate) fn input_content(input: &ChatInput) -> Value {
    match input {
        ChatInput::Prompt(text) => json!({
            "role": "user",
            "parts": [{ "text": text }]
        }),
        ChatInput::FunctionResult { name, response } => json!({
            "role": "user",
            "parts": [{
                "functionResponse": { "name": name, "response": response }
            }]
        }),
    }
}
