//! Name-keyed tool dispatch.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use async_trait::async_trait;
use futures_util::FutureExt;
use tracing::{debug, warn};

use super::{ToolArgs, ToolCallResult, ToolDeclaration, ToolError};

/// Local implementation behind a declared tool.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, args: &ToolArgs) -> Result<ToolCallResult, ToolError>;
}

#[async_trait]
impl<F> ToolHandler for F
where
    F: Fn(&ToolArgs) -> Result<ToolCallResult, ToolError> + Send + Sync,
{
    async fn call(&self, args: &ToolArgs) -> Result<ToolCallResult, ToolError> {
        self(args)
    }
}

struct ToolEntry {
    declaration: ToolDeclaration,
    handler: Box<dyn ToolHandler>,
}

/// Declared tools and their implementations, in registration order.
#[derive(Default)]
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool. Names are unique.
    pub fn register(
        &mut self,
        declaration: ToolDeclaration,
        handler: impl ToolHandler + 'static,
    ) -> Result<(), ToolError> {
        if self.contains(declaration.name()) {
            return Err(ToolError::DuplicateTool(declaration.name().to_string()));
        }
        debug!(tool = declaration.name(), "Registered tool");
        self.entries.push(ToolEntry {
            declaration,
            handler: Box::new(handler),
        });
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn declarations(&self) -> Vec<ToolDeclaration> {
        self.entries.iter().map(|e| e.declaration.clone()).collect()
    }

    /// Documentation for every registered tool, separated by blank lines.
    pub fn describe_all(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.declaration.describe())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Run the named tool.
    ///
    /// Only an unknown name is an `Err`. Handler errors and panics come back
    /// as `ToolCallResult::error` so the conversation can carry on.
    pub async fn dispatch(&self, name: &str, args: &ToolArgs) -> Result<ToolCallResult, ToolError> {
        let entry = self
            .entry(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        debug!(tool = name, "Executing tool");
        let outcome = AssertUnwindSafe(entry.handler.call(args)).catch_unwind().await;

        let result = match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => ToolCallResult::error(e.to_string()),
            Err(payload) => ToolCallResult::error(format!(
                "tool panicked: {}",
                panic_message(payload.as_ref())
            )),
        };

        if !result.is_success() {
            warn!(tool = name, message = %result.message, "Tool returned an error");
        }
        Ok(result)
    }

    fn entry(&self, name: &str) -> Option<&ToolEntry> {
        self.entries.iter().find(|e| e.declaration.name() == name)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
