//! Client for a local Ollama inference server.

mod client;
mod conversions;
mod dto;

pub use client::OllamaClient;
