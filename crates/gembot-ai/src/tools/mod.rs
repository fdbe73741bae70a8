//! Tools the model can call mid-conversation.
//!
//! A tool is a [`ToolDeclaration`] (what the model sees) paired with a
//! [`ToolHandler`] (what runs locally). Every handler reports back through a
//! uniform [`ToolCallResult`] so the session never special-cases failures.

mod clock;
mod declaration;
mod email;
mod registry;
mod result;

pub use clock::{ClockTool, DEFAULT_TIMEZONE, TIME_FORMAT};
pub use declaration::{to_gemini_tool, ParamType, ToolDeclaration, ToolParameter};
pub use email::EmailTool;
pub use registry::{ToolHandler, ToolRegistry};
pub use result::{ToolCallResult, ToolStatus};

/// Arguments of a function call, keyed by parameter name.
pub type ToolArgs = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("tool already registered: {0}")]
    DuplicateTool(String),
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Execution(String),
}

/// Registry with the built-in tools, in the order they are declared to the
/// model: `get_current_time`, `get_future_time`, `send_email`.
pub fn builtin_registry(clock: ClockTool, email: EmailTool) -> Result<ToolRegistry, ToolError> {
    let mut registry = ToolRegistry::new();

    registry.register(
        clock.current_time_declaration(),
        move |_args: &ToolArgs| -> Result<ToolCallResult, ToolError> {
            Ok(ToolCallResult::success(clock.current_time()))
        },
    )?;

    registry.register(
        clock.future_time_declaration(),
        move |args: &ToolArgs| -> Result<ToolCallResult, ToolError> {
            let n_hours = clock::n_hours_arg(args)?;
            Ok(ToolCallResult::success(clock.future_time(n_hours)?))
        },
    )?;

    registry.register(EmailTool::declaration(), email)?;

    Ok(registry)
}
