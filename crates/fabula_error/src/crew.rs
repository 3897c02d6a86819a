//! Crew definition and execution error types.

/// Specific error conditions for crew operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CrewErrorKind {
    /// Failed to read crew manifest file
    FileRead(String),
    /// Failed to parse TOML content
    TomlParse(String),
    /// Role roster does not contain exactly four roles
    RosterSize(usize),
    /// Task list does not contain exactly four tasks
    TaskCount(usize),
    /// Two tasks share the same name
    DuplicateTask(String),
    /// Task depends on a task that does not exist
    UnknownDependency {
        /// Task declaring the dependency
        task: String,
        /// Name of the missing dependency
        dependency: String,
    },
    /// Task depends on a task declared after it
    ForwardDependency {
        /// Task declaring the dependency
        task: String,
        /// Name of the later task
        dependency: String,
    },
    /// Task template is empty or contains only whitespace
    EmptyTemplate(String),
    /// Opening task template lacks the story prompt placeholder
    MissingPlaceholder(String),
}

impl std::fmt::Display for CrewErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrewErrorKind::FileRead(msg) => {
                write!(f, "Failed to read crew manifest: {}", msg)
            }
            CrewErrorKind::TomlParse(msg) => write!(f, "Failed to parse TOML: {}", msg),
            CrewErrorKind::RosterSize(count) => {
                write!(f, "Expected exactly 4 roles, found {}", count)
            }
            CrewErrorKind::TaskCount(count) => {
                write!(f, "Expected exactly 4 tasks, found {}", count)
            }
            CrewErrorKind::DuplicateTask(task) => {
                write!(f, "Task '{}' is declared more than once", task)
            }
            CrewErrorKind::UnknownDependency { task, dependency } => write!(
                f,
                "Task '{}' depends on '{}', which does not exist",
                task, dependency
            ),
            CrewErrorKind::ForwardDependency { task, dependency } => write!(
                f,
                "Task '{}' depends on '{}', which is declared after it",
                task, dependency
            ),
            CrewErrorKind::EmptyTemplate(task) => {
                write!(f, "Task '{}' has an empty template", task)
            }
            CrewErrorKind::MissingPlaceholder(task) => write!(
                f,
                "Task '{}' must contain the {{story_prompt}} placeholder",
                task
            ),
        }
    }
}

/// Error type for crew operations.
///
/// # Examples
///
/// ```
/// use fabula_error::{CrewError, CrewErrorKind};
///
/// let err = CrewError::new(CrewErrorKind::RosterSize(3));
/// assert!(format!("{}", err).contains("exactly 4 roles"));
/// ```
#[derive(Debug, Clone)]
pub struct CrewError {
    /// The specific error condition
    pub kind: CrewErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CrewError {
    /// Create a new CrewError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CrewErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for CrewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Crew Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for CrewError {}
