//! Task specifications: parameterized prompt templates with dependencies.

use serde::{Deserialize, Serialize};

/// One step of the story pipeline.
///
/// The template may contain the `{story_prompt}` placeholder; declared
/// dependencies name earlier tasks whose outputs are appended to the
/// rendered prompt as context. The role executing the task is bound at crew
/// construction, positionally.
///
/// # Examples
///
/// ```
/// use fabula_crew::TaskSpec;
///
/// let task = TaskSpec::builder()
///     .name("plot")
///     .template("Create a plot structure for: \"{story_prompt}\"")
///     .expected_output("A detailed plot structure")
///     .depends_on(Vec::new())
///     .output_file("plot_structure.txt")
///     .build()
///     .unwrap();
///
/// assert_eq!(task.name(), "plot");
/// assert!(task.depends_on().is_empty());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct TaskSpec {
    /// Short identifier, unique within a crew
    name: String,
    /// Prompt template sent to the model
    template: String,
    /// Criteria describing what the completed task should produce
    expected_output: String,
    /// Names of earlier tasks whose outputs feed this prompt
    #[builder(default)]
    #[serde(default)]
    depends_on: Vec<String>,
    /// File the task's output is written to when intermediate saves are on
    output_file: String,
}

impl TaskSpec {
    /// Returns a builder for constructing a TaskSpec.
    pub fn builder() -> TaskSpecBuilder {
        TaskSpecBuilder::default()
    }
}
