//! Gemini conversation handle.
//!
//! The REST API is stateless, so the handle keeps the conversation
//! `contents` and replays them on every round trip.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::tools::{to_gemini_tool, ToolDeclaration};
use crate::{AiError, ChatHandle, ChatInput, ChatModel, ModelResponse};

use super::client::{input_content, GeminiClient};

pub struct GeminiChat {
    client: GeminiClient,
    /// `functionDeclarations`, fixed when the chat starts.
    declarations: Vec<Value>,
    history: Vec<Value>,
    /// Index into `history` where the current turn's prompt sits.
    turn_start: usize,
}

impl ChatModel for GeminiClient {
    type Chat = GeminiChat;

    fn start_chat(self, declarations: Vec<ToolDeclaration>) -> GeminiChat {
        debug!(tools = declarations.len(), model = %self.config.model, "Starting Gemini chat");
        GeminiChat {
            client: self,
            declarations: declarations.iter().map(to_gemini_tool).collect(),
            history: Vec::new(),
            turn_start: 0,
        }
    }
}

impl GeminiChat {
    fn push_input(&mut self, input: &ChatInput) {
        if matches!(input, ChatInput::Prompt(_)) {
            self.turn_start = self.history.len();
        }
        self.history.push(input_content(input));
    }
}

#[async_trait]
impl ChatHandle for GeminiChat {
    async fn send(&mut self, input: ChatInput) -> Result<ModelResponse, AiError> {
        self.push_input(&input);
        let body = self
            .client
            .build_request_body(&self.history, &self.declarations);

        let parsed = match self.client.generate_content(&body).await {
            Ok(json) => GeminiClient::parse_response(json),
            Err(e) => Err(e),
        };

        match parsed {
            Ok(parsed) => {
                if let Some(content) = parsed.content {
                    self.history.push(content);
                }
                Ok(parsed.response)
            }
            Err(e) => {
                // The request never produced a reply; forget it.
                self.history.pop();
                Err(e)
            }
        }
    }

    fn abandon_turn(&mut self) {
        debug!(
            dropped = self.history.len().saturating_sub(self.turn_start),
            "Abandoning turn"
        );
        self.history.truncate(self.turn_start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::GeminiConfig;
    use crate::tools::ParamType;
    use serde_json::json;

    fn chat() -> GeminiChat {
        let client = GeminiClient::new(GeminiConfig::new("AIza-test")).unwrap();
        client.start_chat(vec![
            ToolDeclaration::new("get_current_time", "now"),
            ToolDeclaration::new("get_future_time", "later").required_param(
                "n_hours",
                ParamType::Number,
                "hours",
            ),
        ])
    }

    #[test]
    fn declarations_are_converted_once() {
        let chat = chat();
        assert_eq!(chat.declarations.len(), 2);
        assert!(chat.declarations[0].get("parameters").is_none());
        assert_eq!(chat.declarations[1]["parameters"]["required"], json!(["n_hours"]));
    }

    #[test]
    fn abandon_turn_drops_only_current_turn() {
        let mut chat = chat();

        chat.push_input(&ChatInput::Prompt("first".into()));
        chat.history.push(json!({ "role": "model", "parts": [{ "text": "ok" }] }));
        assert_eq!(chat.history.len(), 2);

        chat.push_input(&ChatInput::Prompt("second".into()));
        chat.history.push(json!({
            "role": "model",
            "parts": [{ "functionCall": { "name": "get_current_time" } }]
        }));
        chat.push_input(&ChatInput::FunctionResult {
            name: "get_current_time".into(),
            response: json!({ "result": {} }),
        });
        assert_eq!(chat.history.len(), 5);

        chat.abandon_turn();
        assert_eq!(chat.history.len(), 2);
        assert_eq!(chat.history[0]["parts"][0]["text"], "first");
    }

    #[test]
    fn function_result_does_not_start_a_turn() {
        let mut chat = chat();
        chat.push_input(&ChatInput::Prompt("hi".into()));
        chat.push_input(&ChatInput::FunctionResult {
            name: "get_current_time".into(),
            response: json!({}),
        });
        assert_eq!(chat.turn_start, 0);
    }
}
