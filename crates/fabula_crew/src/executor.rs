//! Crew execution logic.
//!
//! This module provides the executor that runs a crew's tasks by calling an
//! LLM driver in sequence, feeding earlier outputs into later prompts.

use crate::{Crew, prompt};
use fabula_core::{GenerateRequest, Message, Role};
use fabula_error::{BackendError, FabulaResult};
use fabula_interface::FabulaDriver;
use serde::{Deserialize, Serialize};

/// Sampling temperature used when the caller does not override it.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Execution result for a single task in a crew run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskExecution {
    /// Name of the task (from the crew).
    pub task_name: String,

    /// Name of the role that executed the task.
    pub role_name: String,

    /// The rendered prompt that was sent to the LLM.
    pub prompt: String,

    /// The text response from the LLM.
    pub response: String,

    /// Position in the execution sequence (0-indexed).
    pub sequence_number: usize,
}

/// Complete execution result for a crew run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewExecution {
    /// Name of the crew that was executed.
    pub crew_name: String,

    /// Ordered list of task executions.
    pub task_executions: Vec<TaskExecution>,
}

impl CrewExecution {
    /// The final task's response text, which is the run's overall result.
    pub fn final_output(&self) -> Option<&str> {
        self.task_executions.last().map(|t| t.response.as_str())
    }
}

/// Executes crews by calling an LLM driver in sequence.
///
/// Tasks run in declared order; each rendered prompt carries the verbatim
/// outputs of the task's declared dependencies. A failed call aborts the
/// whole run with no partial-result recovery and no retry.
pub struct CrewExecutor<D: FabulaDriver> {
    driver: D,
    temperature: f32,
}

impl<D: FabulaDriver> CrewExecutor<D> {
    /// Create a new crew executor with the given LLM driver.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Override the sampling temperature sent with every task.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Execute a crew against a story prompt, processing all tasks in order.
    ///
    /// Each task is a fresh two-message exchange: the role's persona as the
    /// system message and the rendered template as the user message. The
    /// rendered template of a later task embeds the outputs of its declared
    /// dependencies.
    ///
    /// # Errors
    ///
    /// Returns an error if any LLM call fails; tasks after the failing one
    /// are never dispatched.
    pub async fn execute(&self, crew: &Crew, story_prompt: &str) -> FabulaResult<CrewExecution> {
        let mut task_executions: Vec<TaskExecution> = Vec::new();

        for (sequence_number, (task, role)) in crew.assignments().enumerate() {
            let rendered = prompt::render_task_prompt(task, story_prompt, &task_executions);

            let messages = vec![
                Message::new(Role::System, prompt::render_persona(role)),
                Message::new(Role::User, rendered.clone()),
            ];

            let request = GenerateRequest::builder()
                .messages(messages)
                .temperature(self.temperature)
                .model(role.model().clone())
                .build()
                .map_err(|e| BackendError::new(format!("Failed to build request: {}", e)))?;

            tracing::info!(
                task = %task.name(),
                role = %role.name(),
                sequence = sequence_number,
                "Dispatching task"
            );

            let response = self.driver.generate(&request).await?;

            if let Some(usage) = response.usage() {
                tracing::debug!(
                    task = %task.name(),
                    input_tokens = *usage.input_tokens(),
                    output_tokens = *usage.output_tokens(),
                    "Task completed"
                );
            }

            task_executions.push(TaskExecution {
                task_name: task.name().clone(),
                role_name: role.name().clone(),
                prompt: rendered,
                response: response.text().clone(),
                sequence_number,
            });
        }

        Ok(CrewExecution {
            crew_name: crew.name().clone(),
            task_executions,
        })
    }

    /// Get a reference to the underlying LLM driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
