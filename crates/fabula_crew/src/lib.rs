//! Role catalog, task templates, and the sequential executor.
//!
//! A crew is four (role, goal, backstory, model) personas bound one-to-one
//! to four prompt templates, executed in a fixed order with each rendered
//! prompt embedding the outputs of its declared dependencies. The built-in
//! crew writes a short story in four passes: plot, characters, scenes,
//! editing.

mod catalog;
mod crew;
mod executor;
mod manifest;
mod prompt;
mod role;
mod task;

pub use catalog::story_crew;
pub use crew::{CREW_SIZE, Crew};
pub use executor::{CrewExecution, CrewExecutor, DEFAULT_TEMPERATURE, TaskExecution};
pub use manifest::{CrewManifest, CrewMetadata};
pub use prompt::{STORY_PROMPT_PLACEHOLDER, render_persona, render_task_prompt};
pub use role::RoleSpec;
pub use task::TaskSpec;
