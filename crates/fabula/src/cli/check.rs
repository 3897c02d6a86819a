//! Check command handler: one-off connectivity test against Ollama.

use crate::config::OllamaConfig;
use fabula_error::FabulaResult;
use fabula_models::OllamaClient;

/// Handles the check command.
///
/// Verifies the server answers `/api/tags`, lists the installed models, and
/// confirms the configured model is among them.
pub async fn handle_check_command(
    model: Option<String>,
    base_url: Option<String>,
) -> FabulaResult<()> {
    let config = OllamaConfig::from_env().with_overrides(base_url, model);
    let client = OllamaClient::new_with_url(config.model().clone(), config.base_url().clone())?;

    println!("Checking Ollama at {}", config.base_url());

    let models = match client.list_models().await {
        Ok(models) => models,
        Err(e) => {
            eprintln!("❌ Cannot connect to Ollama: {}", e);
            eprintln!("   Install Ollama from: https://ollama.ai/");
            eprintln!("   Then run: ollama serve");
            return Err(e);
        }
    };

    println!("✓ Ollama is running with {} models available:", models.len());
    for name in models.iter().take(3) {
        println!("  - {}", name);
    }

    if let Err(e) = client.validate().await {
        eprintln!("❌ {}", e);
        eprintln!("   Try: ollama pull {}", config.model());
        return Err(e);
    }

    println!("✓ Model '{}' is ready", config.model());
    Ok(())
}
