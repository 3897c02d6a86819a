//! Prompt assembly: templates, personas, and dependency context.

use crate::{RoleSpec, TaskSpec, executor::TaskExecution};

/// Placeholder substituted with the user's story concept.
pub const STORY_PROMPT_PLACEHOLDER: &str = "{story_prompt}";

/// Renders the persona system message for a role.
pub fn render_persona(role: &RoleSpec) -> String {
    format!(
        "You are {}. {}\n\nYour personal goal is: {}",
        role.name(),
        role.backstory(),
        role.goal()
    )
}

/// Renders the full user prompt for a task.
///
/// Substitutes the story prompt into the template, appends the expected
/// output criteria, then appends the verbatim outputs of the task's
/// declared dependencies in declaration order.
pub fn render_task_prompt(
    task: &TaskSpec,
    story_prompt: &str,
    completed: &[TaskExecution],
) -> String {
    let mut prompt = task
        .template()
        .replace(STORY_PROMPT_PLACEHOLDER, story_prompt);

    prompt.push_str(&format!(
        "\n\nThis is the expected outcome of your work: {}",
        task.expected_output()
    ));

    let mut context = String::new();
    for dependency in task.depends_on() {
        if let Some(execution) = completed.iter().find(|e| &e.task_name == dependency) {
            context.push_str(&format!(
                "\n\n## {}\n\n{}",
                execution.task_name, execution.response
            ));
        }
    }

    if !context.is_empty() {
        prompt.push_str("\n\nUse the results of the earlier work below as context.");
        prompt.push_str(&context);
    }

    prompt
}
