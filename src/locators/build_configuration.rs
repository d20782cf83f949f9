//! Build configuration locator

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use super::{BuildProjectHavingBuilder, Clauses, Locator};
use crate::macros::flag_pair;
use std::fmt;

/// Fluent filter over build configurations (`buildType` in the REST API)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfigurationHavingBuilder {
    clauses: Clauses,
}

impl BuildConfigurationHavingBuilder {
    /// Creates an empty configuration filter
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

    /// Filters by owning project: `project:<locator>`
    pub fn project<F>(mut self, f: F) -> Self
    where
        F: FnOnce(BuildProjectHavingBuilder) -> BuildProjectHavingBuilder,
    {
        let nested = f(BuildProjectHavingBuilder::new());
        self.clauses.push_nested("project", &nested);
        self
    }

    flag_pair!(
        /// `paused:True`
        paused,
        /// `paused:False`
        not_paused,
        "paused"
    );

    /// Selects templates (`true`) or regular configurations (`false`)
    pub fn template_flag(self, is_template: bool) -> Self {
        self.flag("templateFlag", is_template)
    }

    fn flag(mut self, key: &str, value: bool) -> Self {
        self.clauses.push_flag(key, value);
        self
    }
}

impl Locator for BuildConfigurationHavingBuilder {
    fn locator(&self) -> String {
        self.clauses.render()
    }
}

impl fmt::Display for BuildConfigurationHavingBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.locator())
    }
}
