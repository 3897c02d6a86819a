//! Fabula: an AI story-writing crew over a local Ollama server.
//!
//! Four role-labeled prompt templates are dispatched to a local model in a
//! fixed sequence (plot, characters, scenes, editing), with each stage's
//! output fed into the next prompt as context. This facade crate re-exports
//! the workspace API and hosts the `fabula` CLI binary.

pub mod cli;
mod config;

pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, OllamaConfig};
pub use fabula_core::{GenerateRequest, GenerateResponse, Message, Role, TokenUsageData};
pub use fabula_crew::{
    CREW_SIZE, Crew, CrewExecution, CrewExecutor, CrewManifest, CrewMetadata,
    DEFAULT_TEMPERATURE, RoleSpec, STORY_PROMPT_PLACEHOLDER, TaskExecution, TaskSpec, story_crew,
};
pub use fabula_error::{
    BackendError, CrewError, CrewErrorKind, FabulaError, FabulaErrorKind, FabulaResult,
    OllamaError, OllamaErrorKind,
};
pub use fabula_interface::FabulaDriver;
pub use fabula_models::OllamaClient;

pub use cli::DEFAULT_STORY_PROMPT;
