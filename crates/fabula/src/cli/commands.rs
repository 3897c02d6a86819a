//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AI story-writing crew over a local Ollama server.
#[derive(Debug, Parser)]
#[command(name = "fabula", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a story with the four-stage crew
    Run {
        /// Story concept; prompts interactively when omitted
        #[arg(long)]
        prompt: Option<String>,

        /// Skip the confirmation question
        #[arg(long, short = 'y')]
        yes: bool,

        /// File the final story is written to
        #[arg(long, default_value = "generated_story.txt")]
        output: PathBuf,

        /// Crew manifest TOML; the built-in story crew when omitted
        #[arg(long)]
        crew: Option<PathBuf>,

        /// Model name (overrides LLM_MODEL)
        #[arg(long)]
        model: Option<String>,

        /// Ollama base URL (overrides OLLAMA_URL)
        #[arg(long)]
        base_url: Option<String>,

        /// Sampling temperature
        #[arg(long, default_value_t = fabula_crew::DEFAULT_TEMPERATURE)]
        temperature: f32,

        /// Also write each task's declared output file
        #[arg(long)]
        save_intermediate: bool,
    },

    /// Check connectivity to the Ollama server and list available models
    Check {
        /// Model name (overrides LLM_MODEL)
        #[arg(long)]
        model: Option<String>,

        /// Ollama base URL (overrides OLLAMA_URL)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Show the crew configuration without running it
    Info {
        /// Crew manifest TOML; the built-in story crew when omitted
        #[arg(long)]
        crew: Option<PathBuf>,
    },
}
