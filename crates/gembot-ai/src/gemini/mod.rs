//! Google Gemini API client.
//!
//! `GeminiClient` talks to the Generative Language API; `GeminiChat` is the
//! conversation handle built on top of it.

mod api;
mod chat;
mod client;
mod config;

pub use chat::GeminiChat;
pub use client::GeminiClient;
pub use config::GeminiConfig;
