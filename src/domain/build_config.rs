//! Build configurations
//!
//! A [`BuildConfig`] mirrors the server's `buildType` resource. It is only
//! ever produced by deserializing a response; nothing in this crate mutates
//! one after the fact.

use super::project::Project;
use super::properties::{
    AgentRequirements, ArtifactDependencies, BuildSteps, BuildTriggers, Parameters, Properties,
    SnapshotDependencies, VcsRootEntries,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Build configuration metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Configuration id
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,

    /// Configuration name
    #[serde(default)]
    pub name: String,

    /// REST href
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub href: Option<String>,

    /// Id of the owning project
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub project_id: Option<String>,

    /// Name of the owning project
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub project_name: Option<String>,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    /// Browser URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub web_url: Option<String>,

    /// Owning project, present when the full resource was requested
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub project: Option<Project>,

    /// Build parameters
    #[serde(default)]
    pub parameters: Parameters,

    /// Artifact dependencies
    #[serde(rename = "artifact-dependencies", default)]
    pub artifact_dependencies: ArtifactDependencies,

    /// Snapshot dependencies
    #[serde(rename = "snapshot-dependencies", default)]
    pub snapshot_dependencies: SnapshotDependencies,

    /// Attached VCS roots
    #[serde(rename = "vcs-root-entries", default)]
    pub vcs_root_entries: VcsRootEntries,

    /// Build steps
    #[serde(default)]
    pub steps: BuildSteps,

    /// Agent requirements
    #[serde(rename = "agent-requirements", default)]
    pub agent_requirements: AgentRequirements,

    /// Triggers
    #[serde(default)]
    pub triggers: BuildTriggers,

    /// General settings
    #[serde(default)]
    pub settings: Properties,
}

impl BuildConfig {
    /// Looks up a build parameter value by name
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name)
    }

    /// Looks up a general setting by name
    #[must_use]
    pub fn setting(&self, name: &str) -> Option<&str> {
        self.settings.get(name)
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// `GET app/rest/buildTypes` response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildConfigs {
    /// Number of configurations
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub count: Option<u32>,

    /// Configurations in server order
    #[serde(rename = "buildType", default)]
    pub build_type: Vec<BuildConfig>,
}
