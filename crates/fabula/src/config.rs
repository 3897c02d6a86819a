//! Configuration for the local Ollama server connection.

use derive_getters::Getters;

/// Default Ollama base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default model when `LLM_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Connection settings for the inference server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct OllamaConfig {
    /// Base URL of the server (e.g., "http://localhost:11434")
    base_url: String,
    /// Model identifier to use for inference
    model: String,
}

impl OllamaConfig {
    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `OLLAMA_URL` (default: "http://localhost:11434")
    /// - `LLM_MODEL` (default: "llama3.2")
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("OLLAMA_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self { base_url, model }
    }

    /// Apply command-line overrides on top of the environment settings.
    #[must_use]
    pub fn with_overrides(mut self, base_url: Option<String>, model: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(model) = model {
            self.model = model;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> OllamaConfig {
        OllamaConfigBuilder::default()
            .base_url(DEFAULT_BASE_URL)
            .model(DEFAULT_MODEL)
            .build()
            .unwrap()
    }

    #[test]
    fn overrides_replace_both_fields() {
        let config = base_config().with_overrides(
            Some("http://remote:11434".to_string()),
            Some("mistral".to_string()),
        );

        assert_eq!(config.base_url(), "http://remote:11434");
        assert_eq!(config.model(), "mistral");
    }

    #[test]
    fn absent_overrides_keep_environment_values() {
        let config = base_config().with_overrides(None, None);

        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.model(), DEFAULT_MODEL);
    }

    #[test]
    fn overrides_apply_independently() {
        let config = base_config().with_overrides(None, Some("mistral".to_string()));

        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.model(), "mistral");
    }
}
