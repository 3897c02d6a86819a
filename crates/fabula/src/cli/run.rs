//! Run command handler: the interactive story-writing session.

use crate::config::OllamaConfig;
use fabula_crew::{Crew, CrewExecution, CrewExecutor, story_crew};
use fabula_error::{BackendError, CrewError, FabulaResult};
use fabula_models::OllamaClient;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Story concept used when the user presses Enter at the prompt.
pub const DEFAULT_STORY_PROMPT: &str = "A short sci-fi story about a rogue AI discovering emotions";

/// Handles the run command.
///
/// Collects the story prompt, verifies the inference server, displays the
/// crew configuration, confirms, executes the four tasks in sequence, and
/// writes the final story to disk.
#[allow(clippy::too_many_arguments)]
pub async fn handle_run_command(
    prompt: Option<String>,
    yes: bool,
    output: PathBuf,
    crew_path: Option<PathBuf>,
    model: Option<String>,
    base_url: Option<String>,
    temperature: f32,
    save_intermediate: bool,
) -> FabulaResult<()> {
    let config = OllamaConfig::from_env().with_overrides(base_url, model);
    let crew = load_crew(crew_path)?;

    println!("Welcome to the AI Story Writing Crew!");
    println!("{}", "=".repeat(50));

    let client = OllamaClient::new_with_url(config.model().clone(), config.base_url().clone())?;

    // Connectivity failure aborts before any generation is attempted.
    match client.validate().await {
        Ok(()) => println!("✓ Ollama is running and '{}' is available", config.model()),
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("   Install Ollama from: https://ollama.ai/");
            eprintln!("   Then run: ollama serve");
            return Err(e);
        }
    }

    let story_prompt = match prompt {
        Some(p) => p,
        None => read_story_prompt()?,
    };

    super::info::display_crew(&crew, config.model(), Some(story_prompt.as_str()));

    if !yes {
        println!("The crew is ready to start writing your story!");
        if !confirm("Proceed with story creation? (y/n): ")? {
            println!("Story creation cancelled.");
            return Ok(());
        }
    }

    println!("\nStarting story writing process...");
    println!("This may take several minutes depending on story complexity.\n");

    tracing::info!(crew = %crew.name(), model = %config.model(), "Starting crew run");

    let executor = CrewExecutor::new(client).with_temperature(temperature);
    let execution = executor.execute(&crew, &story_prompt).await?;

    let story = execution
        .final_output()
        .ok_or_else(|| BackendError::new("Crew run produced no output"))?;

    println!("\n{}", "=".repeat(60));
    println!("STORY WRITING COMPLETE!");
    println!("{}", "=".repeat(60));
    println!("\nFinal Result:");
    println!("{}", "-".repeat(30));
    println!("{}", story);

    if save_intermediate {
        write_intermediate_outputs(&crew, &execution, &output)?;
    }

    std::fs::write(&output, story).map_err(|e| {
        BackendError::new(format!("Failed to write {}: {}", output.display(), e))
    })?;

    println!("\nStory saved to: {}", output.display());
    Ok(())
}

/// Loads a crew from a manifest file, or falls back to the built-in crew.
pub(crate) fn load_crew(crew_path: Option<PathBuf>) -> Result<Crew, CrewError> {
    match crew_path {
        Some(path) => Crew::from_file(path),
        None => Ok(story_crew()),
    }
}

/// Writes each task's output to its declared file, next to the final story.
fn write_intermediate_outputs(
    crew: &Crew,
    execution: &CrewExecution,
    output: &Path,
) -> FabulaResult<()> {
    let dir = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    for (task, record) in crew.tasks().iter().zip(&execution.task_executions) {
        let path = dir.join(task.output_file());
        std::fs::write(&path, &record.response).map_err(|e| {
            BackendError::new(format!("Failed to write {}: {}", path.display(), e))
        })?;
        println!("Task output saved to: {}", path.display());
    }

    Ok(())
}

/// Reads the story prompt from stdin, falling back to the default.
fn read_story_prompt() -> FabulaResult<String> {
    println!("Default story prompt: '{}'", DEFAULT_STORY_PROMPT);
    println!();
    print!("Enter your own story prompt (or press Enter to use the default): ");
    flush_stdout()?;

    let line = read_line()?;
    let trimmed = line.trim();

    if trimmed.is_empty() {
        Ok(DEFAULT_STORY_PROMPT.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Asks a y/n question on stdin.
fn confirm(question: &str) -> FabulaResult<bool> {
    print!("{}", question);
    flush_stdout()?;

    let answer = read_line()?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn flush_stdout() -> FabulaResult<()> {
    io::stdout()
        .flush()
        .map_err(|e| BackendError::new(format!("Failed to flush stdout: {}", e)))?;
    Ok(())
}

fn read_line() -> FabulaResult<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| BackendError::new(format!("Failed to read input: {}", e)))?;
    Ok(line)
}
