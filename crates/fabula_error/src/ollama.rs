//! Ollama provider error types.

/// Specific error conditions for the Ollama client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OllamaErrorKind {
    /// Could not reach the Ollama server at all
    ServerNotRunning(String),
    /// Requested model is not in the server's tag list
    ModelNotFound(String),
    /// HTTP/network error during a request
    Http(String),
    /// Server returned a non-success status
    Api {
        /// HTTP status code
        status: u16,
        /// Error body text
        message: String,
    },
    /// Failed to parse the response body
    ResponseParsing(String),
    /// Server returned a completion with no text
    EmptyResponse,
}

impl std::fmt::Display for OllamaErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OllamaErrorKind::ServerNotRunning(msg) => {
                write!(f, "Ollama server is not reachable: {}", msg)
            }
            OllamaErrorKind::ModelNotFound(model) => {
                write!(f, "Model '{}' is not available on the server", model)
            }
            OllamaErrorKind::Http(msg) => write!(f, "HTTP error: {}", msg),
            OllamaErrorKind::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            OllamaErrorKind::ResponseParsing(msg) => {
                write!(f, "Response parsing failed: {}", msg)
            }
            OllamaErrorKind::EmptyResponse => {
                write!(f, "Server returned a completion with no text")
            }
        }
    }
}

/// Error type for Ollama client operations.
///
/// # Examples
///
/// ```
/// use fabula_error::{OllamaError, OllamaErrorKind};
///
/// let err = OllamaError::new(OllamaErrorKind::ModelNotFound("llama3.2".into()));
/// assert!(format!("{}", err).contains("llama3.2"));
/// ```
#[derive(Debug, Clone)]
pub struct OllamaError {
    /// The specific error condition
    pub kind: OllamaErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl OllamaError {
    /// Create a new OllamaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OllamaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for OllamaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ollama Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for OllamaError {}
