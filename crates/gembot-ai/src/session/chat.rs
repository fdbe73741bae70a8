//! The per-turn state machine.

use tracing::{debug, info_span, warn, Instrument};

use crate::{AiError, ChatHandle, ChatInput, ModelResponse, Part};

use super::manager::Session;

impl<C: ChatHandle> Session<C> {
    /// Send a prompt and return the assistant's text.
    ///
    /// If the model asks for a tool, the tool runs and its result goes back
    /// in a second round trip. Any error abandons the turn in the remote
    /// conversation before it is returned.
    pub async fn ask(&mut self, prompt: impl Into<String>) -> Result<String, AiError> {
        let span = info_span!("turn", session = self.id.short());
        let outcome = self.run_turn(prompt.into()).instrument(span).await;
        if outcome.is_err() {
            self.chat.abandon_turn();
        }
        outcome
    }

    async fn run_turn(&mut self, prompt: String) -> Result<String, AiError> {
        let response = self.round_trip(ChatInput::Prompt(prompt)).await?;

        let (name, args) = match first_part(response)? {
            Part::Text(text) => return Ok(text),
            Part::FunctionCall { name, args } => (name, args),
        };

        debug!(tool = %name, "Model requested tool");
        let result = self.registry.dispatch(&name, &args).await?;

        let response = self
            .round_trip(ChatInput::function_result(name, &result))
            .await?;

        match first_part(response)? {
            Part::Text(text) => Ok(text),
            Part::FunctionCall { name, .. } => {
                warn!(tool = %name, "Model chained a second tool call");
                Err(AiError::MalformedResponse(format!(
                    "expected text after a tool result, got another call to `{name}`"
                )))
            }
        }
    }

    async fn round_trip(&mut self, input: ChatInput) -> Result<ModelResponse, AiError> {
        let response = self.chat.send(input).await?;
        self.tracker.record(&response.usage);
        debug!(
            parts = response.parts.len(),
            tokens = response.usage.total_tokens(),
            "Round trip complete"
        );
        Ok(response)
    }
}

fn first_part(response: ModelResponse) -> Result<Part, AiError> {
    response
        .parts
        .into_iter()
        .next()
        .ok_or_else(|| AiError::MalformedResponse("response has no content parts".to_string()))
}
