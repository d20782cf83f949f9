//! Domain model of the REST API
//!
//! Plain records deserialized from server responses. Field names follow the
//! server's JSON representation; unknown fields are ignored so that newer
//! servers keep working.

pub mod build;
pub mod build_config;
pub mod project;
pub mod properties;
pub mod types;
pub mod user;

#[cfg(test)]
mod types_tests;

pub use build::{AgentRef, Build, Builds, Tag, Tags, Triggered, parse_server_date};
pub use build_config::{BuildConfig, BuildConfigs};
pub use project::{Project, Projects};
pub use properties::{
    AgentRequirements, ArtifactDependencies, BuildSteps, BuildTriggers, Feature, Parameters,
    Properties, Property, SnapshotDependencies, VcsRoot, VcsRootEntries, VcsRootEntry,
};
pub use types::{BuildState, BuildStatus};
pub use user::{User, Users};
