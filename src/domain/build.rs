//! Builds

use super::build_config::BuildConfig;
use super::types::{BuildState, BuildStatus};
use super::user::User;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp layout used in responses, e.g. `20240115T103000+0200`
pub const SERVER_DATE_FORMAT: &str = "%Y%m%dT%H%M%S%z";

/// Parses a server timestamp
#[must_use]
pub fn parse_server_date(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, SERVER_DATE_FORMAT).ok()
}

/// A build tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag text
    pub name: String,
}

/// Tags attached to a build
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tags {
    /// Number of tags
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub count: Option<u32>,

    /// Tags in server order
    #[serde(default)]
    pub tag: Vec<Tag>,
}

/// Who or what started a build
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Triggered {
    /// Trigger kind, e.g. `user`, `vcs` or `schedule`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<String>,

    /// Triggering user for manual builds
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user: Option<User>,
}

/// The agent a build ran on
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgentRef {
    /// Agent id
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,

    /// Agent name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
}

/// A single build
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    /// Build id
    pub id: i64,

    /// Build number as shown in the UI
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub number: Option<String>,

    /// Outcome
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<BuildStatus>,

    /// Lifecycle state
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub state: Option<BuildState>,

    /// Logical branch name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub branch_name: Option<String>,

    /// Whether the build ran on the default branch
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default_branch: Option<bool>,

    /// Id of the configuration that produced the build
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub build_type_id: Option<String>,

    /// REST href
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub href: Option<String>,

    /// Browser URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub web_url: Option<String>,

    /// Human readable status line
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status_text: Option<String>,

    /// Raw start timestamp
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub start_date: Option<String>,

    /// Raw finish timestamp
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub finish_date: Option<String>,

    /// Producing configuration, present on single-build responses
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub build_type: Option<BuildConfig>,

    /// Trigger information
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub triggered: Option<Triggered>,

    /// The agent the build ran on
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub agent: Option<AgentRef>,

    /// Build tags
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tags: Option<Tags>,
}

impl Build {
    /// Parsed start time
    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<FixedOffset>> {
        self.start_date.as_deref().and_then(parse_server_date)
    }

    /// Parsed finish time
    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<FixedOffset>> {
        self.finish_date.as_deref().and_then(parse_server_date)
    }

    /// Tag names, empty when the server did not include tags
    #[must_use]
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags
            .iter()
            .flat_map(|t| t.tag.iter().map(|tag| tag.name.as_str()))
            .collect()
    }
}

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}",
            self.id,
            self.number.as_deref().unwrap_or("-"),
            self.status.map_or("-", |s| s.as_str()),
            self.branch_name.as_deref().unwrap_or("-")
        )
    }
}

/// `GET app/rest/builds` response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Builds {
    /// Number of builds in this page
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub count: Option<u32>,

    /// Builds in server order, newest first
    #[serde(default)]
    pub build: Vec<Build>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_build_deserialize() {
        let json = r#"{
            "id": 1234,
            "number": "57",
            "status": "FAILURE",
            "state": "finished",
            "branchName": "main",
            "defaultBranch": true,
            "buildTypeId": "Tools_Compile",
            "startDate": "20240115T103000+0200",
            "finishDate": "20240115T104512+0200",
            "triggered": {"type": "user", "user": {"username": "jdoe"}},
            "agent": {"id": 3, "name": "linux-01"},
            "tags": {"count": 2, "tag": [{"name": "release"}, {"name": "rc"}]}
        }"#;
        let build: Build = serde_json::from_str(json).unwrap();
        assert_eq!(build.id, 1234);
        assert_eq!(build.status, Some(BuildStatus::Failure));
        assert_eq!(build.state, Some(BuildState::Finished));
        assert_eq!(build.tag_names(), vec!["release", "rc"]);
        assert_eq!(build.to_string(), "#1234 57 FAILURE main");

        let started = build.started_at().unwrap();
        assert_eq!(started.year(), 2024);
        assert_eq!(started.hour(), 10);
        assert_eq!(started.offset().local_minus_utc(), 7200);
        assert!(build.finished_at().unwrap() > started);
    }

    #[test]
    fn test_unknown_state_is_tolerated() {
        let build: Build = serde_json::from_str(r#"{"id":1,"state":"somethingNew"}"#).unwrap();
        assert_eq!(build.state, Some(BuildState::Unknown));
        assert!(build.tag_names().is_empty());
    }

    #[test]
    fn test_bad_timestamp_is_none() {
        let build = Build {
            start_date: Some("yesterday".to_string()),
            ..Build::default()
        };
        assert!(build.started_at().is_none());
    }

    #[test]
    fn test_builds_list() {
        let json = r#"{"count":2,"build":[{"id":2,"status":"SUCCESS"},{"id":1,"status":"ERROR"}]}"#;
        let builds: Builds = serde_json::from_str(json).unwrap();
        assert!(builds.build[0].status.unwrap().is_success());
        assert!(builds.build[1].status.unwrap().is_failure());
    }

    #[test]
    fn test_builds_list_with_new_status() {
        let json = r#"{"count":2,"build":[{"id":2,"status":"CANCELED"},{"id":1,"status":"SUCCESS"}]}"#;
        let builds: Builds = serde_json::from_str(json).unwrap();
        assert_eq!(builds.build[0].status, Some(BuildStatus::Unknown));
        assert_eq!(builds.build[1].status, Some(BuildStatus::Success));
    }
}
