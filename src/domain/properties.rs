//! Name/value properties and the typed "feature" records built from them
//!
//! Parameters, settings, steps, triggers, agent requirements and
//! dependencies all share the same `{ id, type, properties }` shape.

use crate::macros::counted_collection;
use serde::{Deserialize, Serialize};

/// A single name/value pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property name
    pub name: String,

    /// Property value; the server omits it for password parameters
    #[serde(default)]
    pub value: String,

    /// Whether the value comes from a parent project or template
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub inherited: Option<bool>,
}

impl Property {
    /// Creates a property
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inherited: None,
        }
    }
}

counted_collection!(
    /// A `{ count, property: [...] }` list, used for parameters and settings
    Properties,
    Property,
    "property"
);

impl Properties {
    /// Looks up a property value by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

/// Build parameters of a configuration
pub type Parameters = Properties;

/// A typed, property-carrying feature: a step, trigger, requirement or
/// dependency
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Feature {
    /// Feature id, unique within its configuration
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,

    /// Display name (steps only)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    /// Feature type, e.g. `simpleRunner` or `vcsTrigger`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<String>,

    /// Whether the feature is switched off
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub disabled: Option<bool>,

    /// Feature properties
    #[serde(default)]
    pub properties: Properties,
}

impl Feature {
    /// Returns true unless the server marked the feature as disabled
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.disabled.unwrap_or(false)
    }
}

counted_collection!(
    /// Build steps of a configuration
    BuildSteps,
    Feature,
    "step"
);

counted_collection!(
    /// Triggers of a configuration
    BuildTriggers,
    Feature,
    "trigger"
);

counted_collection!(
    /// Agent requirements of a configuration
    AgentRequirements,
    Feature,
    "agent-requirement"
);

counted_collection!(
    /// Artifact dependencies of a configuration
    ArtifactDependencies,
    Feature,
    "artifact-dependency"
);

counted_collection!(
    /// Snapshot dependencies of a configuration
    SnapshotDependencies,
    Feature,
    "snapshot-dependency"
);

/// Reference to a VCS root
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VcsRoot {
    /// VCS root id
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,

    /// VCS root name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    /// REST href
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub href: Option<String>,
}

/// Attachment of a VCS root to a configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VcsRootEntry {
    /// Entry id
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,

    /// The attached root
    #[serde(rename = "vcs-root", skip_serializing_if = "Option::is_none", default)]
    pub vcs_root: Option<VcsRoot>,

    /// Checkout rules text
    #[serde(rename = "checkout-rules", skip_serializing_if = "Option::is_none", default)]
    pub checkout_rules: Option<String>,
}

counted_collection!(
    /// VCS roots attached to a configuration
    VcsRootEntries,
    VcsRootEntry,
    "vcs-root-entry"
);
