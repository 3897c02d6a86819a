//! Fabula CLI binary.

use anyhow::Result;
use clap::Parser;
use fabula::cli::{Cli, Commands, handle_check_command, handle_info_command, handle_run_command};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            prompt,
            yes,
            output,
            crew,
            model,
            base_url,
            temperature,
            save_intermediate,
        } => {
            handle_run_command(
                prompt,
                yes,
                output,
                crew,
                model,
                base_url,
                temperature,
                save_intermediate,
            )
            .await?
        }
        Commands::Check { model, base_url } => handle_check_command(model, base_url).await?,
        Commands::Info { crew } => handle_info_command(crew)?,
    }

    Ok(())
}
