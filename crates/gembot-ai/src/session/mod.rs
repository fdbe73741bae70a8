//! Conversation session.
//!
//! A `Session` owns one remote conversation and the tool registry. Each
//! `ask` is one turn: one or two round trips, never more.

mod chat;
mod manager;


pub use manager::Session;
