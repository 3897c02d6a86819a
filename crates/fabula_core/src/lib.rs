//! Core data types for the Fabula story-writing pipeline.
//!
//! This crate provides the foundation data types used across all Fabula
//! interfaces.

mod message;
mod request;
mod role;
mod token_usage;

pub use message::Message;
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
pub use token_usage::TokenUsageData;
