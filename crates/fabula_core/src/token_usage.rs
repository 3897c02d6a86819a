//! Token accounting reported by the inference server.

use serde::{Deserialize, Serialize};

/// Token counts for a single generation call.
///
/// Ollama reports prompt and completion token counts on every blocking
/// chat response; the total is derived.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct TokenUsageData {
    /// Tokens consumed by the prompt
    input_tokens: u64,
    /// Tokens generated in the completion
    output_tokens: u64,
    /// Sum of input and output tokens
    total_tokens: u64,
}

impl TokenUsageData {
    /// Creates a new usage record.
    pub fn new(input_tokens: u64, output_tokens: u64, total_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens,
        }
    }
}
