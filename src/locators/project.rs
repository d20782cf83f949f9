//! Project locator

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use super::{Clauses, Locator};
use crate::macros::flag_pair;
use std::fmt;

/// Fluent filter over projects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildProjectHavingBuilder {
    clauses: Clauses,
}

impl BuildProjectHavingBuilder {
    /// Creates an empty project filter
    pub fn new() -> Self {
        Self::default()
    }

    /// `id:<id>`
    pub fn id(mut self, id: impl AsRef<str>) -> Self {
        self.clauses.push("id", id.as_ref());
        self
    }

    /// `name:<name>`
    pub fn name(mut self, name: impl AsRef<str>) -> Self {
        self.clauses.push("name", name.as_ref());
        self
    }

    /// Filters by parent project: `parent:<locator>`
    pub fn parent<F>(mut self, f: F) -> Self
    where
        F: FnOnce(BuildProjectHavingBuilder) -> BuildProjectHavingBuilder,
    {
        let nested = f(BuildProjectHavingBuilder::new());
        self.clauses.push_nested("parent", &nested);
        self
    }

    flag_pair!(
        /// `archived:True`
        archived,
        /// `archived:False`
        not_archived,
        "archived"
    );

    fn flag(mut self, key: &str, value: bool) -> Self {
        self.clauses.push_flag(key, value);
        self
    }
}

impl Locator for BuildProjectHavingBuilder {
    fn locator(&self) -> String {
        self.clauses.render()
    }
}

impl fmt::Display for BuildProjectHavingBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.locator())
    }
}
