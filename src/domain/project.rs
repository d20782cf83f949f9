//! Projects

use serde::{Deserialize, Serialize};
use std::fmt;

/// A project grouping build configurations
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project id
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,

    /// Project name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    /// Id of the parent project; `_Root` for top-level projects
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parent_project_id: Option<String>,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    /// REST href
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub href: Option<String>,

    /// Browser URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub web_url: Option<String>,

    /// Whether the project is archived
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub archived: Option<bool>,
}

impl Project {
    /// Returns true for the implicit root project
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.id.as_deref() == Some("_Root")
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or_default())
    }
}

/// `GET app/rest/projects` response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Projects {
    /// Number of projects
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub count: Option<u32>,

    /// Projects in server order
    #[serde(default)]
    pub project: Vec<Project>,
}
