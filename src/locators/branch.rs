//! Branch locator

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use super::{Clauses, Locator};
use crate::macros::flag_pair;
use std::fmt;

/// Fluent filter over VCS branches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchHavingBuilder {
    clauses: Clauses,
}

impl BranchHavingBuilder {
    /// Creates an empty branch filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Logical branch name: `name:<name>`
    pub fn name(mut self, name: impl AsRef<str>) -> Self {
        self.clauses.push("name", name.as_ref());
        self
    }

    flag_pair!(
        /// Only the default branch: `default:True`
        default_branch,
        /// Everything but the default branch: `default:False`
        not_default_branch,
        "default"
    );

    flag_pair!(
        /// Only builds without branch information: `unspecified:True`
        unspecified,
        /// `unspecified:False`
        not_unspecified,
        "unspecified"
    );

    flag_pair!(
        /// Only builds with branch information: `branched:True`
        branched,
        /// `branched:False`
        not_branched,
        "branched"
    );

    /// Lifts the server's default-branch restriction: `default:any`
    pub fn any(mut self) -> Self {
        self.clauses.push("default", "any");
        self
    }

    fn flag(mut self, key: &str, value: bool) -> Self {
        self.clauses.push_flag(key, value);
        self
    }
}

impl Locator for BranchHavingBuilder {
    fn locator(&self) -> String {
        self.clauses.render()
    }
}

impl fmt::Display for BranchHavingBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.locator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        assert_eq!(BranchHavingBuilder::new().name("main").locator(), "name:main");
    }

    #[test]
    fn test_flags() {
        let locator = BranchHavingBuilder::new()
            .default_branch()
            .not_default_branch()
            .unspecified()
            .not_unspecified()
            .branched()
            .not_branched()
            .locator();
        assert_eq!(
            locator,
            "default:True,default:False,unspecified:True,unspecified:False,branched:True,branched:False"
        );
    }

    #[test]
    fn test_any() {
        assert_eq!(BranchHavingBuilder::new().any().locator(), "default:any");
    }
}
