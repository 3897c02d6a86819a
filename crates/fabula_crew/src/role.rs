//! Role specifications: the personas attached to task prompts.

use serde::{Deserialize, Serialize};

/// A persona bound to one task in the pipeline.
///
/// Static configuration data: created at startup, never mutated.
///
/// # Examples
///
/// ```
/// use fabula_crew::RoleSpec;
///
/// let role = RoleSpec::builder()
///     .name("Plot Architect")
///     .goal("Design compelling story structures")
///     .backstory("A master storyteller with decades of experience.")
///     .build()
///     .unwrap();
///
/// assert_eq!(role.name(), "Plot Architect");
/// assert!(role.model().is_none());
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
pub struct RoleSpec {
    /// Display name of the role, e.g. "Plot Architect"
    name: String,
    /// What this persona is trying to achieve
    goal: String,
    /// Background text that shapes the persona's voice
    backstory: String,
    /// Model override for this role; the driver default is used when absent
    #[builder(default)]
    #[serde(default)]
    model: Option<String>,
}

impl RoleSpec {
    /// Returns a builder for constructing a RoleSpec.
    pub fn builder() -> RoleSpecBuilder {
        RoleSpecBuilder::default()
    }
}
