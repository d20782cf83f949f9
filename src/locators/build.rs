//! Build locator

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use super::{
    BranchHavingBuilder, BuildConfigurationHavingBuilder, BuildProjectHavingBuilder, Clauses,
    Locator, UserHavingBuilder, format_locator_date,
};
use crate::domain::BuildStatus;
use crate::macros::flag_pair;
use chrono::{DateTime, TimeZone};
use std::fmt;

/// Fluent filter over builds
///
/// Every method appends exactly one clause; nested filters receive a fresh
/// child builder and embed whatever it renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildHavingBuilder {
    clauses: Clauses,
}

impl BuildHavingBuilder {
    /// Creates an empty build filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by build configuration: `buildType:<locator>`
    pub fn build_configuration<F>(mut self, f: F) -> Self
    where
        F: FnOnce(BuildConfigurationHavingBuilder) -> BuildConfigurationHavingBuilder,
    {
        let nested = f(BuildConfigurationHavingBuilder::new());
        self.clauses.push_nested("buildType", &nested);
        self
    }

    /// Filters by build id: `id:<n>`
    pub fn id(mut self, build_id: i64) -> Self {
        self.clauses.push("id", build_id);
        self
    }

    /// Filters by tags: `tags:a,b`
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = tags
            .into_iter()
            .map(|t| t.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(",");
        self.clauses.push("tags", joined);
        self
    }

    /// Filters by outcome: `status:SUCCESS`
    pub fn status(mut self, status: BuildStatus) -> Self {
        self.clauses.push("status", status.as_str().to_uppercase());
        self
    }

    /// Filters by triggering user: `user:<locator>`
    pub fn triggered_by<F>(mut self, f: F) -> Self
    where
        F: FnOnce(UserHavingBuilder) -> UserHavingBuilder,
    {
        let nested = f(UserHavingBuilder::new());
        self.clauses.push_nested("user", &nested);
        self
    }

    flag_pair!(
        /// Only personal builds: `personal:True`
        personal,
        /// Excludes personal builds: `personal:False`
        not_personal,
        "personal"
    );

    flag_pair!(
        /// Only cancelled builds: `cancelled:True`
        cancelled,
        /// Excludes cancelled builds: `cancelled:False`
        not_cancelled,
        "cancelled"
    );

    flag_pair!(
        /// Only running builds: `running:True`
        running,
        /// Excludes running builds: `running:False`
        not_running,
        "running"
    );

    flag_pair!(
        /// Only pinned builds: `pinned:True`
        pinned,
        /// Excludes pinned builds: `pinned:False`
        not_pinned,
        "pinned"
    );

    /// Filters by branch: `branch:<locator>`
    pub fn branch<F>(mut self, f: F) -> Self
    where
        F: FnOnce(BranchHavingBuilder) -> BranchHavingBuilder,
    {
        let nested = f(BranchHavingBuilder::new());
        self.clauses.push_nested("branch", &nested);
        self
    }

    /// Filters by agent: `agentName:<name>`
    pub fn agent_name(mut self, agent_name: impl AsRef<str>) -> Self {
        self.clauses.push("agentName", agent_name.as_ref());
        self
    }

    /// Only builds started after the matched build: `sinceBuild:<locator>`
    pub fn since_build<F>(mut self, f: F) -> Self
    where
        F: FnOnce(BuildHavingBuilder) -> BuildHavingBuilder,
    {
        let nested = f(BuildHavingBuilder::new());
        self.clauses.push_nested("sinceBuild", &nested);
        self
    }

    /// Only builds started after a point in time: `sinceDate:20240115T103000+0200`
    pub fn since_date<Tz: TimeZone>(mut self, when: DateTime<Tz>) -> Self {
        self.clauses.push("sinceDate", format_locator_date(&when));
        self
    }

    /// Filters by owning project: `project:<locator>`
    pub fn project<F>(mut self, f: F) -> Self
    where
        F: FnOnce(BuildProjectHavingBuilder) -> BuildProjectHavingBuilder,
    {
        let nested = f(BuildProjectHavingBuilder::new());
        self.clauses.push_nested("project", &nested);
        self
    }

    /// Filters by build number: `number:<n>`
    pub fn number(mut self, number: impl AsRef<str>) -> Self {
        self.clauses.push("number", number.as_ref());
        self
    }

    /// Limits the page size: `count:<n>`
    pub fn count(mut self, count: u32) -> Self {
        self.clauses.push("count", count);
        self
    }

    /// Skips the first builds of the result: `start:<n>`
    pub fn start(mut self, start: u32) -> Self {
        self.clauses.push("start", start);
        self
    }

    /// Switches the server's implicit filtering on or off: `defaultFilter:False`
    pub fn default_filter(self, enabled: bool) -> Self {
        self.flag("defaultFilter", enabled)
    }

    /// Returns the clauses added so far
    pub fn clauses(&self) -> &Clauses {
        &self.clauses
    }

    fn flag(mut self, key: &str, value: bool) -> Self {
        self.clauses.push_flag(key, value);
        self
    }
}

impl Locator for BuildHavingBuilder {
    fn locator(&self) -> String {
        self.clauses.render()
    }
}

impl fmt::Display for BuildHavingBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.locator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_builder_renders_empty_string() {
        assert_eq!(BuildHavingBuilder::new().locator(), "");
    }

    #[test]
    fn test_id() {
        assert_eq!(BuildHavingBuilder::new().id(42).locator(), "id:42");
    }

    #[test]
    fn test_tags() {
        assert_eq!(BuildHavingBuilder::new().tags(["a", "b"]).locator(), "tags:a,b");
    }

    #[test]
    fn test_empty_tags() {
        let tags: Vec<String> = Vec::new();
        assert_eq!(BuildHavingBuilder::new().tags(tags).locator(), "tags:");
    }

    #[test]
    fn test_status_upper_case() {
        let locator = BuildHavingBuilder::new()
            .status(BuildStatus::Success)
            .status(BuildStatus::Error)
            .locator();
        assert_eq!(locator, "status:SUCCESS,status:ERROR");
    }

    #[test]
    fn test_flags() {
        let locator = BuildHavingBuilder::new()
            .personal()
            .not_personal()
            .cancelled()
            .not_cancelled()
            .running()
            .not_running()
            .pinned()
            .not_pinned()
            .locator();
        assert_eq!(
            locator,
            "personal:True,personal:False,cancelled:True,cancelled:False,\
             running:True,running:False,pinned:True,pinned:False"
        );
    }

    #[test]
    fn test_agent_name() {
        assert_eq!(
            BuildHavingBuilder::new().agent_name("linux-01").locator(),
            "agentName:linux-01"
        );
    }

    #[test]
    fn test_nested_build_configuration() {
        let locator = BuildHavingBuilder::new()
            .build_configuration(|c| c.id("Tools_Compile"))
            .locator();
        assert_eq!(locator, "buildType:id:Tools_Compile");
    }

    #[test]
    fn test_nested_branch() {
        let locator = BuildHavingBuilder::new().branch(|b| b.name("main")).locator();
        assert_eq!(locator, "branch:name:main");
    }

    #[test]
    fn test_nested_user() {
        let locator = BuildHavingBuilder::new()
            .triggered_by(|u| u.username("jdoe"))
            .locator();
        assert_eq!(locator, "user:username:jdoe");
    }

    #[test]
    fn test_nested_project() {
        let locator = BuildHavingBuilder::new().project(|p| p.id("Tools")).locator();
        assert_eq!(locator, "project:id:Tools");
    }

    #[test]
    fn test_since_build_recurses() {
        let locator = BuildHavingBuilder::new()
            .since_build(|b| b.id(100).pinned())
            .running()
            .locator();
        assert_eq!(locator, "sinceBuild:id:100,pinned:True,running:True");
    }

    #[test]
    fn test_nested_callback_untouched_renders_empty_value() {
        let locator = BuildHavingBuilder::new().branch(|b| b).locator();
        assert_eq!(locator, "branch:");
    }

    #[test]
    fn test_since_date() {
        let tz = FixedOffset::east_opt(3 * 3600).unwrap();
        let when = tz.with_ymd_and_hms(2015, 10, 21, 16, 29, 0).unwrap();
        assert_eq!(
            BuildHavingBuilder::new().since_date(when).locator(),
            "sinceDate:20151021T162900+0300"
        );
    }

    #[test]
    fn test_paging_and_number() {
        let locator = BuildHavingBuilder::new()
            .number("57")
            .default_filter(false)
            .start(10)
            .count(5)
            .locator();
        assert_eq!(locator, "number:57,defaultFilter:False,start:10,count:5");
    }

    #[test]
    fn test_duplicate_predicate_kept() {
        let builder = BuildHavingBuilder::new().id(1).id(2);
        assert_eq!(builder.clauses().len(), 2);
        assert_eq!(builder.locator(), "id:1,id:2");
    }

    #[test]
    fn test_display_matches_locator() {
        let builder = BuildHavingBuilder::new().running().id(3);
        assert_eq!(builder.to_string(), builder.locator());
    }

    #[test]
    fn test_order_follows_calls() {
        let locator = BuildHavingBuilder::new()
            .project(|p| p.name("Tools"))
            .status(BuildStatus::Failure)
            .branch(|b| b.default_branch())
            .tags(["nightly"])
            .locator();
        assert_eq!(
            locator,
            "project:name:Tools,status:FAILURE,branch:default:True,tags:nightly"
        );
    }
}
