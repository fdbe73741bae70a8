//! Session struct and construction.

use gembot_common::SessionId;
use tracing::info;

use crate::token_tracker::TokenTracker;
use crate::tools::ToolRegistry;
use crate::{ChatHandle, ChatModel};

/// A conversation with a remote model plus the tools it may call.
pub struct Session<C> {
    pub(super) id: SessionId,
    /// Remote conversation; holds the only copy of the history.
    pub(super) chat: C,
    pub(super) registry: ToolRegistry,
    pub(super) tracker: TokenTracker,
}

impl<C: ChatHandle> Session<C> {
    /// Open a chat declaring exactly the registry's tools, so every
    /// declaration the model sees has an implementation behind it.
    pub fn start<M>(model: M, registry: ToolRegistry) -> Self
    where
        M: ChatModel<Chat = C>,
    {
        let id = SessionId::new();
        let chat = model.start_chat(registry.declarations());
        info!(session = id.short(), tools = registry.len(), "Session started");
        Self {
            id,
            chat,
            registry,
            tracker: TokenTracker::new(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Token usage across every round trip so far.
    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }
}
