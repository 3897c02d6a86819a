//! LLM provider integrations for Fabula.
//!
//! Currently a single provider: a local Ollama server speaking the
//! `/api/chat` blocking-completion protocol.

mod ollama;

pub use ollama::OllamaClient;
