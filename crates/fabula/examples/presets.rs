//! Run the built-in crew against one of three preset story concepts.
//!
//! Requires a running Ollama server with the configured model pulled.
//!
//! Usage: cargo run --example presets -- [1|2|3]

use anyhow::Result;
use fabula::{CrewExecutor, OllamaClient, OllamaConfig, story_crew};

const PRESETS: [&str; 3] = [
    "A short sci-fi story about a rogue AI discovering emotions",
    "A fantasy story about a young mage who must choose between power and love",
    "A detective story set in 1920s Paris involving a stolen painting and secret society",
];

#[tokio::main]
async fn main() -> Result<()> {
    let choice = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(1);
    let prompt = PRESETS
        .get(choice.saturating_sub(1))
        .copied()
        .unwrap_or(PRESETS[0]);

    println!("Writing: {}", prompt);
    println!("{}", "=".repeat(50));

    let config = OllamaConfig::from_env();
    let client = OllamaClient::new_with_url(config.model().clone(), config.base_url().clone())?;
    client.validate().await?;

    let executor = CrewExecutor::new(client);
    let execution = executor.execute(&story_crew(), prompt).await?;

    println!("{}", execution.final_output().unwrap_or_default());
    Ok(())
}
