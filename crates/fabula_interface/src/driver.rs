//! The driver seam between the sequencer and inference backends.

use async_trait::async_trait;
use fabula_core::{GenerateRequest, GenerateResponse};
use fabula_error::FabulaResult;

/// A blocking-completion LLM backend.
///
/// The crew executor is written against this trait rather than a concrete
/// HTTP client, so tests can substitute deterministic mock drivers and new
/// backends can be added without touching the sequencing logic.
#[async_trait]
pub trait FabulaDriver: Send + Sync {
    /// Generate a completion for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached, rejects the
    /// request, or produces an unparseable response.
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse>;

    /// Short name of the backing provider, for logging.
    fn provider_name(&self) -> &'static str;

    /// Identifier of the model this driver sends requests to by default.
    fn model_name(&self) -> &str;
}
