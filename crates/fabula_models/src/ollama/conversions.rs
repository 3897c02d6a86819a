//! Type conversions between Fabula and Ollama formats.

use crate::ollama::dto::{ChatMessage, ChatOptions, ChatRequest, ChatResponse};
use fabula_core::{GenerateRequest, GenerateResponse, Role, TokenUsageData};
use fabula_error::{OllamaError, OllamaErrorKind};

/// Converts a Fabula GenerateRequest to the Ollama chat format.
///
/// The request's model override wins over the client default. Sampling
/// parameters go under Ollama's `options` key, omitted when none are set.
pub fn to_chat_request(
    req: &GenerateRequest,
    default_model: &str,
    keep_alive: Option<&str>,
) -> ChatRequest {
    let messages = req
        .messages()
        .iter()
        .map(|msg| {
            let role = match msg.role() {
                Role::System => "system",
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            ChatMessage {
                role: role.to_string(),
                content: msg.content().clone(),
            }
        })
        .collect();

    let options = ChatOptions {
        temperature: *req.temperature(),
        num_predict: *req.max_tokens(),
    };

    ChatRequest {
        model: req
            .model()
            .clone()
            .unwrap_or_else(|| default_model.to_string()),
        messages,
        stream: false,
        options: if options.is_empty() {
            None
        } else {
            Some(options)
        },
        keep_alive: keep_alive.map(str::to_string),
    }
}

/// Converts an Ollama chat response to a Fabula GenerateResponse.
///
/// # Errors
///
/// Returns [`OllamaErrorKind::EmptyResponse`] when the completion carries no
/// text; every downstream task prompt depends on the previous output, so an
/// empty act cannot be sequenced.
pub fn from_chat_response(response: &ChatResponse) -> Result<GenerateResponse, OllamaError> {
    let text = response.message.content.clone();
    if text.trim().is_empty() {
        return Err(OllamaError::new(OllamaErrorKind::EmptyResponse));
    }

    let usage = match (response.prompt_eval_count, response.eval_count) {
        (Some(input), Some(output)) => Some(TokenUsageData::new(input, output, input + output)),
        _ => None,
    };

    Ok(GenerateResponse::builder()
        .text(text)
        .usage(usage)
        .build()
        .map_err(|e| {
            OllamaError::new(OllamaErrorKind::ResponseParsing(format!(
                "Failed to build response: {}",
                e
            )))
        })?)
}

/// Whether a server tag satisfies a requested model name.
///
/// Ollama tags carry a `:tag` suffix ("llama3.2:latest"); a request for the
/// bare name matches any tag of that model.
pub fn model_matches(tag: &str, model: &str) -> bool {
    tag == model || tag.split(':').next() == Some(model)
}
