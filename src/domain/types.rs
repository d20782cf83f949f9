//! Core enumerations shared by the domain model and the locators
//!
//! The server reports build status in upper case and build state in
//! lower case; both forms are kept on the wire.

#![allow(clippy::must_use_candidate)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a finished (or running) build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BuildStatus {
    /// Build succeeded
    Success,
    /// Build failed
    Failure,
    /// Build finished with an internal error
    Error,
    /// Status could not be determined, or one this crate does not know
    #[serde(other)]
    Unknown,
}

impl BuildStatus {
    /// Returns true if the build succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns true if the build failed or errored
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure | Self::Error)
    }

    /// Upper-case name as it appears in locators and responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
            Self::Error => "ERROR",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BuildStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SUCCESS" => Ok(Self::Success),
            "FAILURE" => Ok(Self::Failure),
            "ERROR" => Ok(Self::Error),
            "UNKNOWN" => Ok(Self::Unknown),
            other => Err(format!("unknown build status: {other}")),
        }
    }
}

/// Lifecycle position of a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildState {
    /// Waiting in the queue
    Queued,
    /// Running on an agent
    Running,
    /// Finished
    Finished,
    /// Removed before it ran
    Deleted,
    /// Any state the client does not know about
    #[serde(other)]
    Unknown,
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queued => write!(f, "queued"),
            Self::Running => write!(f, "running"),
            Self::Finished => write!(f, "finished"),
            Self::Deleted => write!(f, "deleted"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
