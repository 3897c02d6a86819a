//! Error types for the Fabula story-writing pipeline.
//!
//! This crate provides the foundation error types used throughout the Fabula
//! workspace. Generic failures use [`BackendError`] with source-location
//! capture; domain errors carry a kind enum for matching on specific
//! conditions.

mod backend;
mod crew;
mod ollama;

pub use backend::BackendError;
pub use crew::{CrewError, CrewErrorKind};
pub use ollama::{OllamaError, OllamaErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum FabulaErrorKind {
    /// Generic backend error
    Backend(BackendError),
    /// Crew definition or execution error
    Crew(CrewError),
    /// Ollama provider error
    Ollama(OllamaError),
}

impl std::fmt::Display for FabulaErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FabulaErrorKind::Backend(e) => write!(f, "{}", e),
            FabulaErrorKind::Crew(e) => write!(f, "{}", e),
            FabulaErrorKind::Ollama(e) => write!(f, "{}", e),
        }
    }
}

/// Fabula error with kind discrimination.
#[derive(Debug)]
pub struct FabulaError(Box<FabulaErrorKind>);

impl FabulaError {
    /// Create a new error from a kind.
    pub fn new(kind: FabulaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FabulaErrorKind {
        &self.0
    }
}

impl std::fmt::Display for FabulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fabula Error: {}", self.0)
    }
}

impl std::error::Error for FabulaError {}

// Generic From implementation for any type that converts to FabulaErrorKind
impl<T> From<T> for FabulaError
where
    T: Into<FabulaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fabula operations.
pub type FabulaResult<T> = std::result::Result<T, FabulaError>;
