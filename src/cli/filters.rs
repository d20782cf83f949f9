//! Command-line build filters
//!
//! Maps flags onto [`BuildHavingBuilder`] calls in a fixed order, so the
//! same flags always produce the same locator.

use chrono::{DateTime, FixedOffset};
use clap::Args;
use fluenttc::domain::BuildStatus;
use fluenttc::locators::BuildHavingBuilder;

/// Filters shared by `locator` and `builds`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildFilters {
    /// Build id
    #[arg(long)]
    pub id: Option<i64>,
    /// Build configuration id
    #[arg(long = "build-config", value_name = "ID")]
    pub build_config: Option<String>,
    /// Project id
    #[arg(long, value_name = "ID")]
    pub project: Option<String>,
    /// Branch name
    #[arg(long)]
    pub branch: Option<String>,
    /// Build status (success, failure, error, unknown)
    #[arg(long)]
    pub status: Option<BuildStatus>,
    /// Tag; repeat for several
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
    /// Username of the user who triggered the build
    #[arg(long, value_name = "USERNAME")]
    pub user: Option<String>,
    /// Agent name
    #[arg(long)]
    pub agent: Option<String>,
    /// Only builds started after this RFC 3339 timestamp
    #[arg(long = "since-date", value_name = "DATE")]
    pub since_date: Option<DateTime<FixedOffset>>,
    /// Only running builds
    #[arg(long)]
    pub running: bool,
    /// Only pinned builds
    #[arg(long)]
    pub pinned: bool,
    /// Only personal builds
    #[arg(long)]
    pub personal: bool,
    /// Only cancelled builds
    #[arg(long)]
    pub cancelled: bool,
    /// Maximum number of builds
    #[arg(long)]
    pub count: Option<u32>,
}

impl BuildFilters {
    /// Appends one clause per given flag
    pub fn apply(&self, mut having: BuildHavingBuilder) -> BuildHavingBuilder {
        if let Some(id) = self.id {
            having = having.id(id);
        }
        if let Some(config) = &self.build_config {
            having = having.build_configuration(|c| c.id(config));
        }
        if let Some(project) = &self.project {
            having = having.project(|p| p.id(project));
        }
        if let Some(branch) = &self.branch {
            having = having.branch(|b| b.name(branch));
        }
        if let Some(status) = self.status {
            having = having.status(status);
        }
        if !self.tags.is_empty() {
            having = having.tags(&self.tags);
        }
        if let Some(user) = &self.user {
            having = having.triggered_by(|u| u.username(user));
        }
        if let Some(agent) = &self.agent {
            having = having.agent_name(agent);
        }
        if let Some(since) = self.since_date {
            having = having.since_date(since);
        }
        if self.running {
            having = having.running();
        }
        if self.pinned {
            having = having.pinned();
        }
        if self.personal {
            having = having.personal();
        }
        if self.cancelled {
            having = having.cancelled();
        }
        if let Some(count) = self.count {
            having = having.count(count);
        }
        having
    }
}
