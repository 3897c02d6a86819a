//! Ollama API client struct and builder.

use crate::ollama::conversions::{from_chat_response, model_matches, to_chat_request};
use crate::ollama::dto::{ChatResponse, TagsResponse};
use async_trait::async_trait;
use fabula_core::{GenerateRequest, GenerateResponse};
use fabula_error::{FabulaResult, OllamaError, OllamaErrorKind};
use fabula_interface::FabulaDriver;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Default Ollama API base URL.
const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Timeout for the one-off `/api/tags` connectivity check.
const TAGS_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for a local Ollama server.
///
/// Implements [`FabulaDriver`] for use anywhere a driver is accepted.
/// Ollama runs models locally, so there are no auth headers.
///
/// # Examples
///
/// ```no_run
/// use fabula_models::OllamaClient;
///
/// let client = OllamaClient::new("llama3.2").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    model: String,
    base_url: String,
    keep_alive: Option<String>,
}

impl OllamaClient {
    /// Creates a new client against the default local endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(model: impl Into<String>) -> FabulaResult<Self> {
        Self::new_with_url(model, DEFAULT_BASE_URL)
    }

    /// Creates a new client against a custom base URL.
    ///
    /// Useful for remote Ollama instances or non-standard ports.
    pub fn new_with_url(
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> FabulaResult<Self> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            OllamaError::new(OllamaErrorKind::Http(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;

        Ok(Self {
            client,
            model: model.into(),
            base_url: base_url.into(),
            keep_alive: None,
        })
    }

    /// Sets the `keep_alive` duration for model memory residency.
    ///
    /// Examples: `"5m"` (keep for 5 minutes), `"0"` (unload immediately).
    /// When not set, Ollama uses its server default.
    #[must_use]
    pub fn keep_alive(mut self, duration: impl Into<String>) -> Self {
        self.keep_alive = Some(duration.into());
        self
    }

    /// Builds the chat endpoint URL.
    pub(crate) fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    /// Builds the model-list endpoint URL.
    pub(crate) fn tags_url(&self) -> String {
        format!("{}/api/tags", self.base_url)
    }

    /// Lists the model names available on the server.
    ///
    /// # Errors
    ///
    /// Returns [`OllamaErrorKind::ServerNotRunning`] when the server cannot
    /// be reached within the check timeout.
    #[instrument(skip(self), fields(url = %self.tags_url()))]
    pub async fn list_models(&self) -> FabulaResult<Vec<String>> {
        let response = self
            .client
            .get(self.tags_url())
            .timeout(TAGS_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Could not reach Ollama server");
                OllamaError::new(OllamaErrorKind::ServerNotRunning(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(OllamaError::new(OllamaErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            })
            .into());
        }

        let tags: TagsResponse = response.json().await.map_err(|e| {
            OllamaError::new(OllamaErrorKind::ResponseParsing(format!(
                "Failed to parse tag list: {}",
                e
            )))
        })?;

        debug!(models = tags.models.len(), "Fetched model list");
        Ok(tags.models.into_iter().map(|tag| tag.name).collect())
    }

    /// Checks that the server is reachable and the configured model exists.
    ///
    /// # Errors
    ///
    /// Returns [`OllamaErrorKind::ServerNotRunning`] when the server cannot
    /// be reached, or [`OllamaErrorKind::ModelNotFound`] when the model is
    /// not in the server's tag list.
    pub async fn validate(&self) -> FabulaResult<()> {
        let models = self.list_models().await?;

        if !models.iter().any(|tag| model_matches(tag, &self.model)) {
            return Err(OllamaError::new(OllamaErrorKind::ModelNotFound(self.model.clone())).into());
        }

        Ok(())
    }

    /// Sends a blocking completion request to `/api/chat`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the response cannot be parsed.
    #[instrument(skip(self, req), fields(provider = "ollama", model = %self.model))]
    pub async fn complete(&self, req: &GenerateRequest) -> Result<GenerateResponse, OllamaError> {
        let chat_request = to_chat_request(req, &self.model, self.keep_alive.as_deref());

        debug!(
            model = %chat_request.model,
            message_count = chat_request.messages.len(),
            "Sending request"
        );

        let response = self
            .client
            .post(self.chat_url())
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                OllamaError::new(OllamaErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(OllamaError::new(OllamaErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            OllamaError::new(OllamaErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(done = chat_response.done, "Received response");

        from_chat_response(&chat_response)
    }
}

#[async_trait]
impl FabulaDriver for OllamaClient {
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse> {
        Ok(self.complete(req).await?)
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_set() {
        let client = OllamaClient::new("llama3.2").unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn constructor_overrides_base_url() {
        let client = OllamaClient::new_with_url("llama3.2", "http://remote:11434").unwrap();
        assert_eq!(client.base_url, "http://remote:11434");
    }

    #[test]
    fn keep_alive_defaults_to_none() {
        let client = OllamaClient::new("llama3.2").unwrap();
        assert!(client.keep_alive.is_none());
    }

    #[test]
    fn builder_sets_keep_alive() {
        let client = OllamaClient::new("llama3.2").unwrap().keep_alive("5m");
        assert_eq!(client.keep_alive, Some("5m".to_string()));
    }

    #[test]
    fn chat_url_includes_path() {
        let client = OllamaClient::new_with_url("llama3.2", "http://localhost:9999").unwrap();
        assert_eq!(client.chat_url(), "http://localhost:9999/api/chat");
    }

    #[test]
    fn tags_url_includes_path() {
        let client = OllamaClient::new("llama3.2").unwrap();
        assert_eq!(client.tags_url(), "http://localhost:11434/api/tags");
    }

    #[test]
    fn driver_reports_identity() {
        let client = OllamaClient::new("llama3.2").unwrap();
        assert_eq!(client.provider_name(), "ollama");
        assert_eq!(client.model_name(), "llama3.2");
    }
}
