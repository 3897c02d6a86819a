//! The crew: a validated roster of roles bound one-to-one to tasks.

use crate::{RoleSpec, STORY_PROMPT_PLACEHOLDER, TaskSpec};
use fabula_error::{CrewError, CrewErrorKind};
use serde::Serialize;

/// Number of roles and tasks in a crew.
///
/// The pipeline is a fixed four-stage chain: plot, characters, scenes,
/// editing. Rosters of any other size are rejected.
pub const CREW_SIZE: usize = 4;

/// A validated story-writing crew.
///
/// Role assignment is positional and bound once at construction: task `i`
/// is executed by role `i`. Construction fails unless there are exactly
/// [`CREW_SIZE`] roles and tasks and the task dependencies form a chain
/// over earlier tasks only.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct Crew {
    /// Name of the crew, used for tracking and display
    name: String,
    /// Human-readable description
    description: String,
    /// The four personas, in task order
    roles: Vec<RoleSpec>,
    /// The four tasks, in execution order
    tasks: Vec<TaskSpec>,
}

impl Crew {
    /// Creates a crew, validating the roster and task chain.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster or task list is not exactly
    /// [`CREW_SIZE`] long, task names repeat, a template is blank, the
    /// opening template lacks the story prompt placeholder, or a
    /// dependency references a missing or later task.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        roles: Vec<RoleSpec>,
        tasks: Vec<TaskSpec>,
    ) -> Result<Self, CrewError> {
        validate(&roles, &tasks)?;

        Ok(Self {
            name: name.into(),
            description: description.into(),
            roles,
            tasks,
        })
    }

    /// Tasks paired with their assigned roles, in execution order.
    pub fn assignments(&self) -> impl Iterator<Item = (&TaskSpec, &RoleSpec)> {
        self.tasks.iter().zip(self.roles.iter())
    }
}

/// Checks the crew invariants.
fn validate(roles: &[RoleSpec], tasks: &[TaskSpec]) -> Result<(), CrewError> {
    if roles.len() != CREW_SIZE {
        return Err(CrewError::new(CrewErrorKind::RosterSize(roles.len())));
    }

    if tasks.len() != CREW_SIZE {
        return Err(CrewError::new(CrewErrorKind::TaskCount(tasks.len())));
    }

    for (position, task) in tasks.iter().enumerate() {
        if tasks[..position].iter().any(|t| t.name() == task.name()) {
            return Err(CrewError::new(CrewErrorKind::DuplicateTask(
                task.name().clone(),
            )));
        }

        if task.template().trim().is_empty() {
            return Err(CrewError::new(CrewErrorKind::EmptyTemplate(
                task.name().clone(),
            )));
        }

        for dependency in task.depends_on() {
            match tasks.iter().position(|t| t.name() == dependency) {
                None => {
                    return Err(CrewError::new(CrewErrorKind::UnknownDependency {
                        task: task.name().clone(),
                        dependency: dependency.clone(),
                    }));
                }
                Some(declared) if declared >= position => {
                    return Err(CrewError::new(CrewErrorKind::ForwardDependency {
                        task: task.name().clone(),
                        dependency: dependency.clone(),
                    }));
                }
                Some(_) => {}
            }
        }
    }

    // The opening task is the only one parameterized by the user's prompt.
    if !tasks[0].template().contains(STORY_PROMPT_PLACEHOLDER) {
        return Err(CrewError::new(CrewErrorKind::MissingPlaceholder(
            tasks[0].name().clone(),
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(name: &str) -> RoleSpec {
        RoleSpec::builder()
            .name(name)
            .goal("goal")
            .backstory("backstory")
            .build()
            .unwrap()
    }

    fn task(name: &str, depends_on: Vec<String>) -> TaskSpec {
        TaskSpec::builder()
            .name(name)
            .template("Work on \"{story_prompt}\"")
            .expected_output("output")
            .depends_on(depends_on)
            .output_file(format!("{name}.txt"))
            .build()
            .unwrap()
    }

    fn four_roles() -> Vec<RoleSpec> {
        vec![role("a"), role("b"), role("c"), role("d")]
    }

    fn four_tasks() -> Vec<TaskSpec> {
        vec![
            task("t1", vec![]),
            task("t2", vec!["t1".into()]),
            task("t3", vec!["t1".into(), "t2".into()]),
            task("t4", vec!["t1".into(), "t2".into(), "t3".into()]),
        ]
    }

    #[test]
    fn valid_crew_constructs() {
        let crew = Crew::new("test", "a test crew", four_roles(), four_tasks()).unwrap();
        assert_eq!(crew.name(), "test");
        assert_eq!(crew.assignments().count(), CREW_SIZE);
    }

    #[test]
    fn rejects_short_roster() {
        let err = Crew::new("test", "", vec![role("a")], four_tasks()).unwrap_err();
        assert!(matches!(err.kind, CrewErrorKind::RosterSize(1)));
    }

    #[test]
    fn rejects_oversized_roster() {
        let mut roles = four_roles();
        roles.push(role("e"));
        let err = Crew::new("test", "", roles, four_tasks()).unwrap_err();
        assert!(matches!(err.kind, CrewErrorKind::RosterSize(5)));
    }

    #[test]
    fn rejects_wrong_task_count() {
        let err = Crew::new("test", "", four_roles(), vec![task("t1", vec![])]).unwrap_err();
        assert!(matches!(err.kind, CrewErrorKind::TaskCount(1)));
    }

    #[test]
    fn rejects_duplicate_task_names() {
        let tasks = vec![
            task("t1", vec![]),
            task("t1", vec![]),
            task("t3", vec![]),
            task("t4", vec![]),
        ];
        let err = Crew::new("test", "", four_roles(), tasks).unwrap_err();
        assert!(matches!(err.kind, CrewErrorKind::DuplicateTask(_)));
    }

    #[test]
    fn rejects_unknown_dependency() {
        let tasks = vec![
            task("t1", vec![]),
            task("t2", vec!["missing".into()]),
            task("t3", vec![]),
            task("t4", vec![]),
        ];
        let err = Crew::new("test", "", four_roles(), tasks).unwrap_err();
        assert!(matches!(
            err.kind,
            CrewErrorKind::UnknownDependency { .. }
        ));
    }

    #[test]
    fn rejects_forward_dependency() {
        let tasks = vec![
            task("t1", vec![]),
            task("t2", vec!["t3".into()]),
            task("t3", vec![]),
            task("t4", vec![]),
        ];
        let err = Crew::new("test", "", four_roles(), tasks).unwrap_err();
        assert!(matches!(
            err.kind,
            CrewErrorKind::ForwardDependency { .. }
        ));
    }

    #[test]
    fn rejects_blank_template() {
        let mut tasks = four_tasks();
        tasks[2] = TaskSpec::builder()
            .name("t3")
            .template("   ")
            .expected_output("output")
            .output_file("t3.txt")
            .build()
            .unwrap();
        let err = Crew::new("test", "", four_roles(), tasks).unwrap_err();
        assert!(matches!(err.kind, CrewErrorKind::EmptyTemplate(_)));
    }

    #[test]
    fn rejects_missing_story_prompt_placeholder() {
        let mut tasks = four_tasks();
        tasks[0] = TaskSpec::builder()
            .name("t1")
            .template("No placeholder here")
            .expected_output("output")
            .output_file("t1.txt")
            .build()
            .unwrap();
        let err = Crew::new("test", "", four_roles(), tasks).unwrap_err();
        assert!(matches!(err.kind, CrewErrorKind::MissingPlaceholder(_)));
    }
}
