//! Crew manifests: loading custom crews from TOML files.
//!
//! A manifest carries crew metadata, four roles, and four tasks:
//!
//! ```toml
//! [crew]
//! name = "story_writing"
//! description = "Collaborative short-story pipeline"
//!
//! [[roles]]
//! name = "Plot Architect"
//! goal = "..."
//! backstory = "..."
//!
//! [[tasks]]
//! name = "plot"
//! template = "... {story_prompt} ..."
//! expected_output = "..."
//! output_file = "plot_structure.txt"
//! ```
//!
//! Parsing validates the same invariants as [`Crew::new`]: exactly four
//! roles and tasks, unique task names, and dependencies that only reference
//! earlier tasks.

use crate::{Crew, RoleSpec, TaskSpec};
use fabula_error::{CrewError, CrewErrorKind};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// Metadata block of a crew manifest.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct CrewMetadata {
    /// Name of the crew
    name: String,
    /// Human-readable description
    #[serde(default)]
    description: String,
}

/// Deserialized shape of a crew TOML file.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct CrewManifest {
    /// Crew metadata
    crew: CrewMetadata,
    /// The four personas, in task order
    roles: Vec<RoleSpec>,
    /// The four tasks, in execution order
    tasks: Vec<TaskSpec>,
}

impl CrewManifest {
    /// Validates the manifest and produces a crew.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster or task chain violates the crew
    /// invariants.
    pub fn into_crew(self) -> Result<Crew, CrewError> {
        Crew::new(
            self.crew.name,
            self.crew.description,
            self.roles,
            self.tasks,
        )
    }
}

impl FromStr for CrewManifest {
    type Err = CrewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| CrewError::new(CrewErrorKind::TomlParse(e.to_string())))
    }
}

impl Crew {
    /// Loads and validates a crew from a TOML manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or the crew invariants are violated.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CrewError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CrewError::new(CrewErrorKind::FileRead(e.to_string())))?;
        content.parse()
    }
}

impl FromStr for Crew {
    type Err = CrewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<CrewManifest>()?.into_crew()
    }
}
