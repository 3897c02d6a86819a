//! Info command handler: displaying the crew configuration.

use fabula_crew::Crew;
use fabula_error::FabulaResult;
use std::path::PathBuf;

/// Handles the info command.
pub fn handle_info_command(crew_path: Option<PathBuf>) -> FabulaResult<()> {
    let config = crate::config::OllamaConfig::from_env();
    let crew = super::run::load_crew(crew_path)?;
    display_crew(&crew, config.model(), None);
    Ok(())
}

/// Prints the crew configuration: prompt, roles, and task outcomes.
pub(crate) fn display_crew(crew: &Crew, model: &str, story_prompt: Option<&str>) {
    println!("\nCrew Configuration:");
    println!("{}", "=".repeat(30));
    println!("Crew: {}", crew.name());
    if !crew.description().is_empty() {
        println!("Description: {}", crew.description());
    }
    if let Some(prompt) = story_prompt {
        println!("Story Prompt: {}", prompt);
    }
    println!("Model: {}", model);
    println!("Process: sequential");

    println!("\nAgents:");
    for (i, role) in crew.roles().iter().enumerate() {
        println!("  {}. {}", i + 1, role.name());
        println!("     Goal: {}", role.goal());
    }

    println!("\nTasks:");
    for (i, task) in crew.tasks().iter().enumerate() {
        println!("  {}. {}", i + 1, task.expected_output());
    }

    println!("\n{}", "=".repeat(50));
}
