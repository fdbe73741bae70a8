//! Token usage tracking for a session.

use crate::TokenUsage;

/// Cumulative token usage and round-trip count.
#[derive(Debug, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    round_trips: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from one round trip.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.round_trips += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn round_trips(&self) -> u64 {
        self.round_trips
    }
}
