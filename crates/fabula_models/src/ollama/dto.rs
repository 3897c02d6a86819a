//! Data transfer objects for the Ollama HTTP API.

use serde::{Deserialize, Serialize};

/// A message in the Ollama chat format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

/// Sampling options passed under Ollama's `options` key.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChatOptions {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
}

impl ChatOptions {
    /// True when no option is set and the key can be omitted entirely.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.num_predict.is_none()
    }
}

/// Ollama `/api/chat` request body.
///
/// `stream` is always serialized; the blocking client pins it to `false` so
/// the server answers with a single JSON object rather than NDJSON.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Streaming toggle
    pub stream: bool,
    /// Sampling options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ChatOptions>,
    /// How long the server keeps the model loaded after this request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<String>,
}

/// Ollama `/api/chat` response body (non-streaming).
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// The assistant's message
    pub message: ChatMessage,
    /// Whether generation finished
    #[serde(default)]
    pub done: bool,
    /// Tokens consumed by the prompt
    #[serde(default)]
    pub prompt_eval_count: Option<u64>,
    /// Tokens generated in the completion
    #[serde(default)]
    pub eval_count: Option<u64>,
}

/// One entry in the `/api/tags` model list.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelTag {
    /// Full model name, e.g. "llama3.2:latest"
    pub name: String,
}

/// Ollama `/api/tags` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TagsResponse {
    /// Models available on the server
    #[serde(default)]
    pub models: Vec<ModelTag>,
}
